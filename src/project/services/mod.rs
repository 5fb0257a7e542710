//! Application services for project management.

mod registry;
pub mod validation;

pub use registry::{ProjectService, ProjectServiceError, ProjectServiceResult};
pub use validation::{PROJECT_FIELDS, ProjectValidator, RequiredFields};
