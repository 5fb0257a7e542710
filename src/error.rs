//! Error classification shared by the service layer and the HTTP surface.

use crate::store::{InvalidIdentifier, StoreError};

/// Broad class of a service failure.
///
/// The class decides how a failure is reported to clients: validation and
/// not-found failures are client errors, store failures are server errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request was rejected by validation; nothing was written.
    Validation,
    /// The target record, or a record it references, does not exist.
    NotFound,
    /// The record store failed or the identifier format was malformed.
    Store,
}

/// Errors that can report their [`ErrorKind`].
pub trait Classify {
    /// Returns the failure class.
    fn kind(&self) -> ErrorKind;
}

impl Classify for StoreError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::DuplicateKey { .. } => ErrorKind::Validation,
            Self::InvalidIdentifier(_) | Self::Persistence(_) => ErrorKind::Store,
        }
    }
}

impl Classify for InvalidIdentifier {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Store
    }
}
