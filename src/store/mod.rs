//! Shared record-store abstractions.
//!
//! Every aggregate exposes its own repository port, but all of them report
//! failures through [`StoreError`] and the in-memory adapters share the
//! [`MemoryCollection`] keyed record container. Reference population is
//! expressed through the [`Projection`] trait.

mod error;
mod memory;

pub use error::{InvalidIdentifier, StoreError, StoreResult};
pub use memory::MemoryCollection;

/// Builds a reduced view of a stored record.
///
/// Used when a reference field is populated with only a subset of the
/// referenced record's fields.
pub trait Projection<T> {
    /// Projects the record into the reduced view.
    fn project(record: &T) -> Self;
}
