//! Domain model for tasks.
//!
//! A task's status decides which of its fields a request may change; see
//! [`MutationPolicy`].

mod error;
mod ids;
mod policy;
mod status;
mod task;
mod timeline;
mod views;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError};
pub use ids::TaskId;
pub use policy::{MutationPolicy, TaskField};
pub use status::{TaskPriority, TaskStatus};
pub use task::{Task, TaskChanges, TaskFilter, TaskSummary};
pub use timeline::Timeline;
pub use views::TaskDetail;
