//! Port contracts for user management.

pub mod repository;

pub use repository::UserRepository;
