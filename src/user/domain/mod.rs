//! Domain model for users.

mod ids;
mod user;

pub use ids::UserId;
pub use user::{User, UserFilter};
