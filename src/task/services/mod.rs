//! Application services for task management.

mod lifecycle;
pub mod validation;

pub use lifecycle::{TaskService, TaskServiceError, TaskServiceResult};
pub use validation::{TASK_FIELDS, TaskValidationConfig, TaskValidator};
