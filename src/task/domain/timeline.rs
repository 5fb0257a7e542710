//! Task timeline.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Assignment, due and last-update dates of a task.
///
/// `date_updated` is maintained by the service on every successful write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// When the task was assigned.
    pub date_assigned: Option<DateTime<Utc>>,
    /// When the task is due.
    pub date_due: Option<DateTime<Utc>>,
    /// When the task was last written.
    pub date_updated: Option<DateTime<Utc>>,
}

impl Timeline {
    /// Creates a timeline with the given assignment and due dates.
    #[must_use]
    pub const fn new(
        date_assigned: Option<DateTime<Utc>>,
        date_due: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            date_assigned,
            date_due,
            date_updated: None,
        }
    }

    /// Timeline with every date empty.
    ///
    /// Attached to tasks created without a timeline.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self::new(None, None)
    }

    /// Parses a timeline date.
    ///
    /// Accepts RFC 3339 timestamps and `YYYY-MM-DD` dates, the latter read as
    /// midnight UTC.
    #[must_use]
    pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw)
            .map(|timestamp| timestamp.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
                    .map(|midnight| midnight.and_utc())
            })
    }
}
