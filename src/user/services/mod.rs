//! Application services for user management.

mod directory;
pub mod validation;

pub use directory::{UserService, UserServiceError, UserServiceResult};
