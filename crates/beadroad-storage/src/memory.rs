//! In-process history store. Same linkage rules as the SQLite store, no
//! durability.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use beadroad_core::errors::StorageError;
use beadroad_core::history::{HistorySnapshot, PatternRecord, RecordDraft, SummaryDraft, SummaryRecord};
use beadroad_core::traits::HistoryStore;

#[derive(Debug, Default)]
struct MemoryLog {
    records: Vec<PatternRecord>,
    summaries: Vec<SummaryRecord>,
}

#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    log: Mutex<MemoryLog>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryLog>, StorageError> {
        self.log.lock().map_err(|_| StorageError::Unavailable {
            message: "memory log lock poisoned".to_string(),
        })
    }
}

fn newest_first<T: Clone>(items: &[T], limit: usize) -> Vec<T> {
    items.iter().rev().take(limit).cloned().collect()
}

impl HistoryStore for MemoryHistoryStore {
    fn append(&self, draft: &RecordDraft) -> Result<PatternRecord, StorageError> {
        let mut log = self.lock()?;
        let previous = log.records.last();
        let prior_count = draft.transition_key(previous).and_then(|key| {
            log.records
                .iter()
                .rev()
                .find(|r| r.link.transition.as_deref() == Some(key.as_str()))
                .map(|r| r.link.transition_count)
        });
        let link = draft.link(previous, prior_count);
        let round = log.records.len() as i64 + 1;
        let record = PatternRecord::from_parts(round, draft, link);
        log.records.push(record.clone());
        Ok(record)
    }

    fn count_all(&self) -> Result<u64, StorageError> {
        Ok(self.lock()?.records.len() as u64)
    }

    fn count_since(&self, since: DateTime<Utc>) -> Result<u64, StorageError> {
        let log = self.lock()?;
        Ok(log.records.iter().filter(|r| r.recorded_at >= since).count() as u64)
    }

    fn recent(&self, limit: usize) -> Result<Vec<PatternRecord>, StorageError> {
        Ok(newest_first(&self.lock()?.records, limit))
    }

    fn snapshot(&self, since: DateTime<Utc>, limit: usize) -> Result<HistorySnapshot, StorageError> {
        let log = self.lock()?;
        let total = log.records.len() as u64;
        let recent_count = log.records.iter().filter(|r| r.recorded_at >= since).count() as u64;
        Ok(HistorySnapshot {
            total,
            recent_count,
            records: newest_first(&log.records, HistorySnapshot::read_len(total, recent_count, limit)),
        })
    }

    fn append_summary(&self, draft: &SummaryDraft) -> Result<SummaryRecord, StorageError> {
        let mut log = self.lock()?;
        let record = SummaryRecord {
            round: log.summaries.len() as i64 + 1,
            recorded_at: draft.recorded_at,
            summary: draft.summary.clone(),
        };
        log.summaries.push(record.clone());
        Ok(record)
    }

    fn recent_summaries(&self, limit: usize) -> Result<Vec<SummaryRecord>, StorageError> {
        Ok(newest_first(&self.lock()?.summaries, limit))
    }
}
