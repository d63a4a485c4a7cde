//! SQL for the history tables.

pub mod group_sequences;
pub mod pattern_records;

use beadroad_core::errors::StorageError;
use chrono::{DateTime, Utc};

/// Epoch seconds back to a timestamp.
pub(crate) fn from_epoch(round: i64, secs: i64) -> Result<DateTime<Utc>, StorageError> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| StorageError::CorruptRow {
        round,
        message: format!("timestamp {secs} out of range"),
    })
}

/// Row limits arrive as `usize`; SQLite wants `i64`.
pub(crate) fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}
