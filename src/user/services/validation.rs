//! Validation for user update requests.

use serde_json::Value;

use crate::validation::{SanitizedRequest, ValidationError, fields};

/// Fields a client may send when updating a user.
pub const USER_UPDATE_FIELDS: [&str; 1] = ["active"];

/// Validates a user update body and returns the requested active flag.
///
/// `active` is the only field that may change through the public interface;
/// every other key is ignored. An empty body is reported as a missing
/// `active` rather than as empty input.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedBody`] when the body is not an object,
/// [`ValidationError::MissingActive`] when `active` is not supplied, or
/// [`ValidationError::InvalidType`] when it is not a boolean.
pub fn validate_active_update(body: &Value) -> Result<bool, ValidationError> {
    let request =
        SanitizedRequest::extract(&USER_UPDATE_FIELDS, body).map_err(|err| match err {
            ValidationError::EmptyInput => ValidationError::MissingActive,
            other => other,
        })?;
    fields::flag("active", request.get("active"))?.ok_or(ValidationError::MissingActive)
}
