//! Read models returned by the project service.

use super::{Project, ProjectId};
use crate::task::domain::TaskSummary;
use crate::user::domain::{User, UserId};
use serde::Serialize;

/// A project with its manager populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectListing {
    /// The stored project.
    #[serde(flatten)]
    pub project: Project,
    /// The managing user, or `None` when the reference is dangling.
    pub manager: Option<User>,
}

/// A single project with its relationships resolved.
///
/// Counts are derived from the current relationship state on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDetail {
    /// Project identifier.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Project description.
    pub description: String,
    /// Source repository location.
    pub repository: String,
    /// Managing user's identifier.
    pub manager_id: UserId,
    /// The managing user, or `None` when the reference is dangling.
    pub manager: Option<User>,
    /// Tasks belonging to the project.
    pub tasks: Vec<TaskSummary>,
    /// Number of users assigned to the project.
    #[serde(rename = "userCount")]
    pub user_count: usize,
    /// Number of tasks belonging to the project.
    #[serde(rename = "taskCount")]
    pub task_count: usize,
}

impl ProjectDetail {
    /// Assembles the detail view from a project and its resolved relations.
    #[must_use]
    pub fn new(
        project: Project,
        manager: Option<User>,
        tasks: Vec<TaskSummary>,
        user_count: usize,
    ) -> Self {
        let task_count = tasks.len();
        Self {
            id: project.id(),
            manager_id: project.manager_id(),
            name: project.name().to_owned(),
            description: project.description().to_owned(),
            repository: project.repository().to_owned(),
            manager,
            tasks,
            user_count,
            task_count,
        }
    }
}
