//! One consistent read of the log for a statistics run.

use super::record::PatternRecord;

/// Counts and newest records taken from a single view of the log.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistorySnapshot {
    /// Every pattern record in the log.
    pub total: u64,
    /// Records at or after the window start.
    pub recent_count: u64,
    /// The newest [`HistorySnapshot::read_len`] records, newest first.
    pub records: Vec<PatternRecord>,
}

impl HistorySnapshot {
    /// How many of the newest records a snapshot carries.
    ///
    /// The whole log when it fits in `limit`, otherwise enough to cover both
    /// the recent window and the `limit` newest records.
    pub fn read_len(total: u64, recent_count: u64, limit: usize) -> usize {
        let total = usize::try_from(total).unwrap_or(usize::MAX);
        if total <= limit {
            total
        } else {
            let recent = usize::try_from(recent_count).unwrap_or(usize::MAX);
            recent.max(limit).min(total)
        }
    }
}
