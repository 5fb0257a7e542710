//! Adapter implementations for project persistence.

pub mod memory;
