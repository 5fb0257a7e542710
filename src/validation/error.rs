//! Validation failures raised before any record is written.

use thiserror::Error;

/// Client-caused request failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The request body is a JSON object without any keys.
    #[error("input data is empty")]
    EmptyInput,

    /// The request body is not a JSON object.
    #[error("input data must be a JSON object")]
    MalformedBody,

    /// A required field was not supplied.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A field was supplied with a value of the wrong JSON type.
    #[error("{field} must be {expected}")]
    InvalidType {
        /// Offending field.
        field: &'static str,
        /// Human-readable description of the expected type.
        expected: &'static str,
    },

    /// The task priority is not one of the allowed values.
    #[error("priority {value} is not any valid priorities of {allowed}")]
    InvalidPriority {
        /// Supplied value.
        value: String,
        /// Comma-separated allowed values.
        allowed: String,
    },

    /// The task status is not one of the allowed values.
    #[error("status {value} is not any valid statuses of {allowed}")]
    InvalidStatus {
        /// Supplied value.
        value: String,
        /// Comma-separated allowed values.
        allowed: String,
    },

    /// The supplied timeline lacks `date_assigned` or `date_due`.
    #[error("timeline does not contain all required fields (date_assigned, date_due)")]
    IncompleteTimeline,

    /// A timeline date could not be parsed.
    #[error("{field} is not a valid date: {value}")]
    InvalidDate {
        /// Offending timeline field.
        field: &'static str,
        /// Supplied value.
        value: String,
    },

    /// The assigned user belongs to a different project than the task.
    #[error("user {user} is not assigned to project {project}")]
    CrossReferenceMismatch {
        /// Referenced user.
        user: String,
        /// Referenced project.
        project: String,
    },

    /// A field was supplied that the current task status does not allow to
    /// change.
    #[error("only tasks with status 'assigned' can adjust {field} (current status: {status})")]
    FieldNotMutable {
        /// Field that may not change.
        field: &'static str,
        /// Current task status.
        status: String,
    },

    /// Another project already uses the name.
    #[error("project name not unique: {0}")]
    ProjectNameNotUnique(String),

    /// A reference set contains the same identifier more than once.
    #[error("duplicate id in {field}: {id}")]
    DuplicateId {
        /// Reference set field.
        field: &'static str,
        /// Repeated identifier.
        id: String,
    },

    /// A user update did not supply `active`.
    #[error("missing active property (the only one updateable)")]
    MissingActive,

    /// A project cannot be removed while records still reference it.
    #[error("project {project} is still referenced by {tasks} task(s) and {users} user(s)")]
    ProjectInUse {
        /// Project that was to be removed.
        project: String,
        /// Number of tasks referencing the project.
        tasks: usize,
        /// Number of users referencing the project.
        users: usize,
    },
}
