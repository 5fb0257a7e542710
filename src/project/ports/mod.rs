//! Port contracts for project management.

pub mod repository;

pub use repository::ProjectRepository;
