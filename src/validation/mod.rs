//! Request validation shared by the entity services.
//!
//! Entity-specific validators live next to their aggregates
//! (`user::services`, `project::services`, `task::services`); this module
//! holds the pieces they share: the request sanitizer, typed field
//! extraction, reference-set checks and the [`ValidationError`] taxonomy.

mod error;
pub mod fields;
mod sanitizer;

pub use error::ValidationError;
pub use sanitizer::{SanitizedRequest, Supplied};
