//! Timestamp helpers. History timestamps are UTC and coarse to the minute.

use chrono::{DateTime, Utc};

/// Drop seconds and sub-second precision.
pub fn truncate_to_minute(at: DateTime<Utc>) -> DateTime<Utc> {
    truncate_to(at, 60)
}

/// Drop minutes, seconds and sub-second precision.
pub fn truncate_to_hour(at: DateTime<Utc>) -> DateTime<Utc> {
    truncate_to(at, 3600)
}

/// Compact `YYMMDDHHMM` label used when displaying records.
pub fn minute_label(at: DateTime<Utc>) -> String {
    at.format("%y%m%d%H%M").to_string()
}

fn truncate_to(at: DateTime<Utc>, step_secs: i64) -> DateTime<Utc> {
    let secs = at.timestamp();
    DateTime::from_timestamp(secs - secs.rem_euclid(step_secs), 0).unwrap_or(at)
}
