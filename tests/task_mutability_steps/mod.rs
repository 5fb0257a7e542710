//! Step definitions for task mutability scenarios.

mod then;
mod when;
pub mod world;
