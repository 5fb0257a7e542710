//! Status-gated field mutability.

use super::TaskStatus;
use std::fmt;

/// A client-writable task field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// `name`
    Name,
    /// `details`
    Details,
    /// `priority`
    Priority,
    /// `status`
    Status,
    /// `timeline`
    Timeline,
    /// `user_id`
    UserId,
    /// `project_id`
    ProjectId,
}

impl TaskField {
    /// Every writable field in request whitelist order.
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Details,
        Self::Priority,
        Self::Status,
        Self::Timeline,
        Self::UserId,
        Self::ProjectId,
    ];

    /// Returns the request key for the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Details => "details",
            Self::Priority => "priority",
            Self::Status => "status",
            Self::Timeline => "timeline",
            Self::UserId => "user_id",
            Self::ProjectId => "project_id",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which task fields a request may change.
///
/// A task is fully editable while `assigned`; in every other status only
/// the status itself may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationPolicy {
    /// Every writable field may change.
    FullyMutable,
    /// Only `status` may change.
    StatusOnly,
}

impl MutationPolicy {
    /// Returns the policy for a task in the given status.
    #[must_use]
    pub const fn for_status(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Assigned => Self::FullyMutable,
            TaskStatus::InProgress | TaskStatus::InReview | TaskStatus::Completed => {
                Self::StatusOnly
            }
        }
    }

    /// Returns the fields this policy allows to change.
    #[must_use]
    pub const fn mutable_fields(self) -> &'static [TaskField] {
        match self {
            Self::FullyMutable => &TaskField::ALL,
            Self::StatusOnly => &[TaskField::Status],
        }
    }

    /// Returns `true` when the policy allows `field` to change.
    #[must_use]
    pub fn allows(self, field: TaskField) -> bool {
        self.mutable_fields().contains(&field)
    }
}
