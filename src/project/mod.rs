//! Project registry for the tracker.
//!
//! Projects are created, renamed, reassigned and removed through this module.
//! Project names are unique ignoring case, and a project's member users and
//! tasks are derived from the records pointing at it. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
