//! Task tracking for the tracker.
//!
//! Tasks belong to a project and may be assigned to a user of that project.
//! A task's status gates which of its fields may still change: see
//! [`domain::MutationPolicy`]. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
