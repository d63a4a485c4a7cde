//! Whole-board shorthand summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::time::truncate_to_minute;

/// A summary string waiting to be appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryDraft {
    pub recorded_at: DateTime<Utc>,
    pub summary: String,
}

impl SummaryDraft {
    pub fn new(recorded_at: DateTime<Utc>, summary: impl Into<String>) -> Self {
        Self {
            recorded_at: truncate_to_minute(recorded_at),
            summary: summary.into(),
        }
    }
}

/// A persisted summary row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub round: i64,
    pub recorded_at: DateTime<Utc>,
    pub summary: String,
}
