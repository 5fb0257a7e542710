//! Task record, validated changes and listing filter.

use super::{MutationPolicy, TaskId, TaskPriority, TaskStatus, Timeline};
use crate::project::domain::ProjectId;
use crate::store::Projection;
use crate::user::domain::UserId;
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A unit of work belonging to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: String,
    #[serde(default)]
    details: Option<String>,
    priority: TaskPriority,
    status: TaskStatus,
    #[serde(default)]
    timeline: Timeline,
    #[serde(default)]
    user_id: Option<UserId>,
    project_id: ProjectId,
}

impl Task {
    /// Creates an unassigned task with a fresh identifier.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        priority: TaskPriority,
        status: TaskStatus,
        timeline: Timeline,
        project_id: ProjectId,
    ) -> Self {
        Self {
            id: TaskId::new(),
            name: name.into(),
            details: None,
            priority,
            status,
            timeline,
            user_id: None,
            project_id,
        }
    }

    /// Sets the task details.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Assigns the task to a user.
    #[must_use]
    pub const fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task details, if any.
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the task timeline.
    #[must_use]
    pub const fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Returns the assigned user, if any.
    #[must_use]
    pub const fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the mutability policy for the task's current status.
    #[must_use]
    pub const fn mutation_policy(&self) -> MutationPolicy {
        MutationPolicy::for_status(self.status)
    }

    /// Merges validated changes into the task.
    ///
    /// A supplied timeline replaces the stored one.
    pub fn apply(&mut self, changes: TaskChanges) {
        let TaskChanges {
            name,
            details,
            priority,
            status,
            timeline,
            user_id,
            project_id,
        } = changes;
        if let Some(value) = name {
            self.name = value;
        }
        if let Some(value) = details {
            self.details = Some(value);
        }
        if let Some(value) = priority {
            self.priority = value;
        }
        if let Some(value) = status {
            self.status = value;
        }
        if let Some(value) = timeline {
            self.timeline = value;
        }
        if let Some(value) = user_id {
            self.user_id = Some(value);
        }
        if let Some(value) = project_id {
            self.project_id = value;
        }
    }

    /// Stamps `timeline.date_updated` with the current clock time.
    pub fn touch(&mut self, clock: &impl Clock) {
        self.timeline.date_updated = Some(clock.utc());
    }
}

/// Validated task fields from a create or update request.
///
/// `None` means the field was not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// New task name.
    pub name: Option<String>,
    /// New details.
    pub details: Option<String>,
    /// New priority.
    pub priority: Option<TaskPriority>,
    /// New status.
    pub status: Option<TaskStatus>,
    /// Replacement timeline.
    pub timeline: Option<Timeline>,
    /// New assignee.
    pub user_id: Option<UserId>,
    /// New owning project.
    pub project_id: Option<ProjectId>,
}

/// Task reference populated with its identifier, name and details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    /// Task identifier.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Task details.
    pub details: Option<String>,
}

impl Projection<Task> for TaskSummary {
    fn project(record: &Task) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            details: record.details.clone(),
        }
    }
}

/// Filter applied when listing tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Only tasks belonging to this project.
    pub project_id: Option<ProjectId>,
    /// Only tasks assigned to this user.
    pub user_id: Option<UserId>,
}

impl TaskFilter {
    /// Filter matching the tasks of a project.
    #[must_use]
    pub const fn in_project(project_id: ProjectId) -> Self {
        Self {
            project_id: Some(project_id),
            user_id: None,
        }
    }

    /// Returns `true` when the task satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.project_id
            .is_none_or(|project_id| task.project_id == project_id)
            && self
                .user_id
                .is_none_or(|user_id| task.user_id == Some(user_id))
    }
}
