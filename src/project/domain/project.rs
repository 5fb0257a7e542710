//! Project record, validated changes and listing filter.

use super::ProjectId;
use crate::store::Projection;
use crate::user::domain::UserId;
use serde::{Deserialize, Serialize};

/// A tracked project.
///
/// Member users and tasks are not stored on the project; they point at it
/// through their own `project_id` and are derived on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    description: String,
    repository: String,
    manager_id: UserId,
}

impl Project {
    /// Creates a project with a fresh identifier.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        repository: impl Into<String>,
        manager_id: UserId,
    ) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            description: description.into(),
            repository: repository.into(),
            manager_id,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the source repository location.
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Returns the managing user's identifier.
    #[must_use]
    pub const fn manager_id(&self) -> UserId {
        self.manager_id
    }

    /// Merges validated changes into the project.
    pub fn apply(&mut self, changes: ProjectChanges) {
        let ProjectChanges {
            name,
            description,
            repository,
            manager_id,
        } = changes;
        if let Some(value) = name {
            self.name = value;
        }
        if let Some(value) = description {
            self.description = value;
        }
        if let Some(value) = repository {
            self.repository = value;
        }
        if let Some(value) = manager_id {
            self.manager_id = value;
        }
    }
}

/// Validated project fields from a create or update request.
///
/// `None` means the field was not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectChanges {
    /// New project name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New repository location.
    pub repository: Option<String>,
    /// New manager reference.
    pub manager_id: Option<UserId>,
}

/// Project reference populated with only its identifier and name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Project identifier.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
}

impl Projection<Project> for ProjectSummary {
    fn project(record: &Project) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
        }
    }
}

/// Filter applied when listing projects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Case-insensitive substring the project name must contain.
    pub name_contains: Option<String>,
}

impl ProjectFilter {
    /// Filter matching names containing `fragment`, ignoring case.
    #[must_use]
    pub fn name_contains(fragment: impl Into<String>) -> Self {
        Self {
            name_contains: Some(fragment.into()),
        }
    }

    /// Returns `true` when the project satisfies the filter.
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        self.name_contains.as_deref().is_none_or(|fragment| {
            project
                .name
                .to_lowercase()
                .contains(&fragment.to_lowercase())
        })
    }
}
