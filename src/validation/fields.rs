//! Typed extraction of sanitized field values.
//!
//! Each extractor keeps the absent marker as `None` and rejects a supplied
//! value of the wrong JSON type with [`ValidationError::InvalidType`].

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use serde_json::Value;

use super::{Supplied, ValidationError};

/// Extracts a string field.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidType`] when the value is not a string.
pub fn text<'a>(
    field: &'static str,
    supplied: Supplied<&'a Value>,
) -> Result<Option<&'a str>, ValidationError> {
    supplied
        .present()
        .map(|value| {
            value.as_str().ok_or(ValidationError::InvalidType {
                field,
                expected: "a string",
            })
        })
        .transpose()
}

/// Extracts a boolean field.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidType`] when the value is not a boolean.
pub fn flag(
    field: &'static str,
    supplied: Supplied<&Value>,
) -> Result<Option<bool>, ValidationError> {
    supplied
        .present()
        .map(|value| {
            value.as_bool().ok_or(ValidationError::InvalidType {
                field,
                expected: "a boolean",
            })
        })
        .transpose()
}

/// Extracts a field holding a list of strings.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidType`] when the value is not an array
/// of strings.
pub fn text_list<'a>(
    field: &'static str,
    supplied: Supplied<&'a Value>,
) -> Result<Option<Vec<&'a str>>, ValidationError> {
    let invalid = ValidationError::InvalidType {
        field,
        expected: "an array of identifiers",
    };
    let Some(value) = supplied.present() else {
        return Ok(None);
    };
    let items = value.as_array().ok_or_else(|| invalid.clone())?;
    items
        .iter()
        .map(|item| item.as_str().ok_or_else(|| invalid.clone()))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Unwraps a required value.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] when the value is absent.
pub fn require<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

/// Verifies that a reference set holds every identifier at most once.
///
/// Identifiers are inserted into a set and the set's cardinality is compared
/// with the input length.
///
/// # Errors
///
/// Returns [`ValidationError::DuplicateId`] naming the first repeated
/// identifier.
pub fn ensure_distinct<I>(field: &'static str, ids: &[I]) -> Result<(), ValidationError>
where
    I: Eq + Hash + fmt::Display,
{
    let mut seen = HashSet::with_capacity(ids.len());
    let mut repeated = None;
    for id in ids {
        if !seen.insert(id) && repeated.is_none() {
            repeated = Some(id);
        }
    }
    if seen.len() == ids.len() {
        return Ok(());
    }
    Err(ValidationError::DuplicateId {
        field,
        id: repeated.map(ToString::to_string).unwrap_or_default(),
    })
}
