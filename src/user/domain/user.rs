//! User record and listing filter.

use super::UserId;
use crate::project::domain::ProjectId;
use serde::{Deserialize, Serialize};

/// A tracked person.
///
/// Users are created outside the public interface; only the `active` flag
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    title: String,
    #[serde(default)]
    manager_id: Option<UserId>,
    #[serde(default)]
    project_id: Option<ProjectId>,
    active: bool,
}

impl User {
    /// Creates a user without a manager or project.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        title: impl Into<String>,
        active: bool,
    ) -> Self {
        Self {
            id: UserId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            title: title.into(),
            manager_id: None,
            project_id: None,
            active,
        }
    }

    /// Sets the user's manager.
    #[must_use]
    pub const fn with_manager(mut self, manager_id: UserId) -> Self {
        self.manager_id = Some(manager_id);
        self
    }

    /// Assigns the user to a project.
    #[must_use]
    pub const fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the job title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the manager reference, if any.
    #[must_use]
    pub const fn manager_id(&self) -> Option<UserId> {
        self.manager_id
    }

    /// Returns the project the user is assigned to, if any.
    #[must_use]
    pub const fn project_id(&self) -> Option<ProjectId> {
        self.project_id
    }

    /// Returns whether the user is active.
    #[must_use]
    pub const fn active(&self) -> bool {
        self.active
    }

    /// Sets the active flag.
    pub const fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Filter applied when listing users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Only users with this active flag.
    pub active: Option<bool>,
    /// Only users assigned to this project.
    pub project_id: Option<ProjectId>,
}

impl UserFilter {
    /// Filter matching users with the given active flag.
    #[must_use]
    pub const fn active(active: bool) -> Self {
        Self {
            active: Some(active),
            project_id: None,
        }
    }

    /// Filter matching members of a project.
    #[must_use]
    pub const fn in_project(project_id: ProjectId) -> Self {
        Self {
            active: None,
            project_id: Some(project_id),
        }
    }

    /// Returns `true` when the user satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        self.active.is_none_or(|active| user.active == active)
            && self
                .project_id
                .is_none_or(|project_id| user.project_id == Some(project_id))
    }
}
