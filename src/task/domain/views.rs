//! Read models returned by the task service.

use super::{Task, TaskId, TaskPriority, TaskStatus, Timeline};
use crate::project::domain::ProjectSummary;
use crate::user::domain::User;
use serde::Serialize;

/// A single task with its user and project references populated.
///
/// The populated documents replace the raw identifiers under the same keys.
/// A dangling reference serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDetail {
    /// Task identifier.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Task details.
    pub details: Option<String>,
    /// Task priority.
    pub priority: TaskPriority,
    /// Task status.
    pub status: TaskStatus,
    /// Task timeline.
    pub timeline: Timeline,
    /// The assigned user in full.
    pub user_id: Option<User>,
    /// The owning project's identifier and name.
    pub project_id: Option<ProjectSummary>,
}

impl TaskDetail {
    /// Assembles the detail view from a task and its resolved references.
    #[must_use]
    pub fn new(task: Task, user: Option<User>, project: Option<ProjectSummary>) -> Self {
        Self {
            id: task.id(),
            name: task.name().to_owned(),
            details: task.details().map(str::to_owned),
            priority: task.priority(),
            status: task.status(),
            timeline: *task.timeline(),
            user_id: user,
            project_id: project,
        }
    }
}
