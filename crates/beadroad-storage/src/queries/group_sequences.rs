//! Queries for the group_sequences table (board summaries).

use beadroad_core::errors::StorageError;
use beadroad_core::history::{SummaryDraft, SummaryRecord};
use rusqlite::{params, Connection};

use super::{from_epoch, sql_limit};

/// Insert a summary. Returns the assigned round.
pub fn insert(conn: &Connection, draft: &SummaryDraft) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO group_sequences (recorded_at, summary) VALUES (?1, ?2)",
        params![draft.recorded_at.timestamp(), draft.summary],
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    Ok(conn.last_insert_rowid())
}

pub fn count(conn: &Connection) -> Result<u64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM group_sequences", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Up to `limit` summaries, newest first.
pub fn query_recent(conn: &Connection, limit: usize) -> Result<Vec<SummaryRecord>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT round, recorded_at, summary FROM group_sequences
             ORDER BY round DESC LIMIT ?1",
        )
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let rows = stmt
        .query_map(params![sql_limit(limit)], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, String>(2)?,
            ))
        })
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    rows.into_iter()
        .map(|(round, secs, summary)| {
            Ok(SummaryRecord {
                round,
                recorded_at: from_epoch(round, secs)?,
                summary,
            })
        })
        .collect()
}
