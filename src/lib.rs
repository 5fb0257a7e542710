//! Trackboard: project, task and user tracking API.
//!
//! This crate exposes users, projects and tasks over a JSON HTTP interface
//! and enforces the rules that tie them together: request whitelisting,
//! reference checks between records, unique project names, and a status gate
//! on task edits.
//!
//! # Architecture
//!
//! Trackboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`store`]: Shared store errors, in-memory collections and projections
//! - [`validation`]: Request sanitizer and field extractors
//! - [`error`]: Failure classification
//! - [`user`]: User directory and activation
//! - [`project`]: Project registry
//! - [`task`]: Task tracking and the status gate
//! - [`api`]: HTTP routes
//! - [`config`]: Environment configuration
//! - [`seed`]: Start-up snapshot loader

pub mod api;
pub mod config;
pub mod error;
pub mod project;
pub mod seed;
pub mod store;
pub mod task;
pub mod user;
pub mod validation;
