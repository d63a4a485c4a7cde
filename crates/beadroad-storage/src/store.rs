//! SQLite-backed history store.

use std::path::Path;

use chrono::{DateTime, Utc};

use beadroad_core::config::StorageConfig;
use beadroad_core::errors::StorageError;
use beadroad_core::history::{HistorySnapshot, PatternRecord, RecordDraft, SummaryDraft, SummaryRecord};
use beadroad_core::traits::HistoryStore;

use crate::connection::writer::{with_immediate_transaction, with_read_transaction};
use crate::connection::DatabaseManager;
use crate::queries::{group_sequences, pattern_records};

/// Durable history log.
pub struct SqliteHistoryStore {
    db: DatabaseManager,
}

impl SqliteHistoryStore {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open(path)?,
        })
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open_in_memory()?,
        })
    }

    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        Self::open(&config.effective_db_path())
    }

    pub fn db(&self) -> &DatabaseManager {
        &self.db
    }

    pub fn count_summaries(&self) -> Result<u64, StorageError> {
        self.db.with_reader(group_sequences::count)
    }
}

impl HistoryStore for SqliteHistoryStore {
    fn append(&self, draft: &RecordDraft) -> Result<PatternRecord, StorageError> {
        let record = self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                let previous = pattern_records::latest(tx)?;
                let prior_count = match draft.transition_key(previous.as_ref()) {
                    Some(key) => pattern_records::latest_transition_count(tx, &key)?,
                    None => None,
                };
                let link = draft.link(previous.as_ref(), prior_count);
                let round = pattern_records::insert(tx, draft, &link)?;
                Ok(PatternRecord::from_parts(round, draft, link))
            })
        })?;

        tracing::debug!(
            round = record.round,
            zone = %record.group_range,
            transition = ?record.link.transition,
            "appended pattern record"
        );
        Ok(record)
    }

    fn count_all(&self) -> Result<u64, StorageError> {
        self.db.with_reader(pattern_records::count)
    }

    fn count_since(&self, since: DateTime<Utc>) -> Result<u64, StorageError> {
        self.db
            .with_reader(|conn| pattern_records::count_since(conn, since.timestamp()))
    }

    fn recent(&self, limit: usize) -> Result<Vec<PatternRecord>, StorageError> {
        self.db
            .with_reader(|conn| pattern_records::query_recent(conn, limit))
    }

    fn snapshot(&self, since: DateTime<Utc>, limit: usize) -> Result<HistorySnapshot, StorageError> {
        self.db.with_reader(|conn| {
            with_read_transaction(conn, |tx| {
                let total = pattern_records::count(tx)?;
                let recent_count = pattern_records::count_since(tx, since.timestamp())?;
                let records = pattern_records::query_recent(
                    tx,
                    HistorySnapshot::read_len(total, recent_count, limit),
                )?;
                Ok(HistorySnapshot {
                    total,
                    recent_count,
                    records,
                })
            })
        })
    }

    fn append_summary(&self, draft: &SummaryDraft) -> Result<SummaryRecord, StorageError> {
        let round = self.db.with_writer(|conn| group_sequences::insert(conn, draft))?;
        Ok(SummaryRecord {
            round,
            recorded_at: draft.recorded_at,
            summary: draft.summary.clone(),
        })
    }

    fn recent_summaries(&self, limit: usize) -> Result<Vec<SummaryRecord>, StorageError> {
        self.db
            .with_reader(|conn| group_sequences::query_recent(conn, limit))
    }
}
