//! HistoryStore trait: the append-only log the statistics are computed over.
//!
//! Implementations must make `append` atomic (a failed append leaves the log
//! unchanged) and serve each read as a point-in-time snapshot.

use chrono::{DateTime, Utc};

use crate::errors::StorageError;
use crate::history::{HistorySnapshot, PatternRecord, RecordDraft, SummaryDraft, SummaryRecord};

pub trait HistoryStore: Send + Sync {
    /// Append one pattern record, linking it to the latest record.
    fn append(&self, draft: &RecordDraft) -> Result<PatternRecord, StorageError>;

    /// Total number of pattern records.
    fn count_all(&self) -> Result<u64, StorageError>;

    /// Number of pattern records recorded at or after `since`.
    fn count_since(&self, since: DateTime<Utc>) -> Result<u64, StorageError>;

    /// Up to `limit` pattern records, newest first.
    fn recent(&self, limit: usize) -> Result<Vec<PatternRecord>, StorageError>;

    /// Total count, count since `since`, and the newest
    /// [`HistorySnapshot::read_len`] records, all from one view of the log.
    /// Appends that land during the call must not show up in any part of it.
    fn snapshot(&self, since: DateTime<Utc>, limit: usize) -> Result<HistorySnapshot, StorageError>;

    /// Append one board summary.
    fn append_summary(&self, draft: &SummaryDraft) -> Result<SummaryRecord, StorageError>;

    /// Up to `limit` board summaries, newest first.
    fn recent_summaries(&self, limit: usize) -> Result<Vec<SummaryRecord>, StorageError>;

    /// Every pattern record, newest first.
    fn all(&self) -> Result<Vec<PatternRecord>, StorageError> {
        self.recent(usize::MAX)
    }
}
