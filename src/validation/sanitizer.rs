//! Request sanitizer.
//!
//! Reduces a raw JSON request body to the whitelisted fields of an entity,
//! recording for each whitelisted field whether it was supplied.

use serde_json::Value;

use super::ValidationError;

/// Marks whether a whitelisted field was supplied in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Supplied<T> {
    /// The field was not supplied (or was supplied as `null`).
    Absent,
    /// The field was supplied with a value.
    Present(T),
}

impl<T> Supplied<T> {
    /// Returns `true` when the field was supplied.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Converts from `&Supplied<T>` to `Supplied<&T>`.
    #[must_use]
    pub const fn as_ref(&self) -> Supplied<&T> {
        match self {
            Self::Absent => Supplied::Absent,
            Self::Present(value) => Supplied::Present(value),
        }
    }

    /// Drops the absent marker, returning the supplied value if any.
    #[must_use]
    pub fn present(self) -> Option<T> {
        match self {
            Self::Absent => None,
            Self::Present(value) => Some(value),
        }
    }
}

/// A request body reduced to an entity's whitelisted fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedRequest {
    fields: Vec<(&'static str, Supplied<Value>)>,
}

impl SanitizedRequest {
    /// Extracts the whitelisted fields from a request body.
    ///
    /// Keys outside the whitelist are dropped. Every whitelisted key is kept,
    /// either as [`Supplied::Present`] or as [`Supplied::Absent`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedBody`] when the body is not a JSON
    /// object and [`ValidationError::EmptyInput`] when the object has no keys
    /// at all. The empty check runs before whitelisting.
    pub fn extract(whitelist: &[&'static str], body: &Value) -> Result<Self, ValidationError> {
        let Value::Object(map) = body else {
            return Err(ValidationError::MalformedBody);
        };
        if map.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        let fields = whitelist
            .iter()
            .map(|&key| {
                let supplied = match map.get(key) {
                    None | Some(Value::Null) => Supplied::Absent,
                    Some(value) => Supplied::Present(value.clone()),
                };
                (key, supplied)
            })
            .collect();
        Ok(Self { fields })
    }

    /// Returns the supplied value for a field.
    ///
    /// Fields outside the whitelist are always absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Supplied<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| *field == key)
            .map_or(Supplied::Absent, |(_, supplied)| supplied.as_ref())
    }

    /// Iterates over the names of supplied fields in whitelist order.
    pub fn supplied_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|(_, supplied)| supplied.is_present())
            .map(|(field, _)| *field)
    }
}
