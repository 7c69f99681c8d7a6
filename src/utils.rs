//! Time helpers for the registration service

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Formats a DateTime as an RFC 3339 timestamp with millisecond precision
///
/// Example output: "2025-06-14T10:03:54.374Z"
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Gets the current time formatted for API responses
pub fn current_timestamp() -> String {
    format_timestamp(Utc::now())
}

/// Today's date on the server's local calendar, the reference date for age
/// checks
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
