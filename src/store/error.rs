//! Error types shared by every repository implementation.

use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A record identifier that could not be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {collection} identifier: {value}")]
pub struct InvalidIdentifier {
    /// Collection the identifier was meant to address.
    pub collection: &'static str,
    /// The raw value that failed to parse.
    pub value: String,
}

impl InvalidIdentifier {
    /// Creates an invalid identifier error for the given collection.
    #[must_use]
    pub fn new(collection: &'static str, value: impl Into<String>) -> Self {
        Self {
            collection,
            value: value.into(),
        }
    }
}

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The identifier format is malformed.
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifier),

    /// A unique key is already taken by another record.
    #[error("duplicate {collection} {key}: {value}")]
    DuplicateKey {
        /// Collection holding the conflicting record.
        collection: &'static str,
        /// Name of the unique key.
        key: &'static str,
        /// Conflicting value.
        value: String,
    },

    /// The addressed record does not exist.
    #[error("{collection} not found: {id}")]
    NotFound {
        /// Collection that was searched.
        collection: &'static str,
        /// Identifier that was not found.
        id: String,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Creates a not-found error for a collection and identifier.
    #[must_use]
    pub fn not_found(collection: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            collection,
            id: id.to_string(),
        }
    }
}
