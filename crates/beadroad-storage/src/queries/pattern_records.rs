//! Queries for the pattern_records table.

use beadroad_core::errors::StorageError;
use beadroad_core::history::{CodeProfile, PatternRecord, RecordDraft, RecordLink};
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{from_epoch, sql_limit};

const SELECT_COLUMNS: &str = "round, recorded_at, group_range, pair, pair_result, triple,
    triple_result, prev_pair, prev_triple, transition, transition_count,
    pair_a_count, pair_b_count, pair_switches, triple_a_count, triple_b_count, triple_switches";

/// Raw column values, converted after the row callback returns.
struct PatternRow {
    round: i64,
    recorded_at: i64,
    group_range: String,
    pair: String,
    pair_result: String,
    triple: String,
    triple_result: String,
    prev_pair: Option<String>,
    prev_triple: Option<String>,
    transition: Option<String>,
    transition_count: u32,
    pair_profile: CodeProfile,
    triple_profile: CodeProfile,
}

impl PatternRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            round: row.get(0)?,
            recorded_at: row.get(1)?,
            group_range: row.get(2)?,
            pair: row.get(3)?,
            pair_result: row.get(4)?,
            triple: row.get(5)?,
            triple_result: row.get(6)?,
            prev_pair: row.get(7)?,
            prev_triple: row.get(8)?,
            transition: row.get(9)?,
            transition_count: row.get(10)?,
            pair_profile: CodeProfile {
                a_count: row.get(11)?,
                b_count: row.get(12)?,
                switches: row.get(13)?,
            },
            triple_profile: CodeProfile {
                a_count: row.get(14)?,
                b_count: row.get(15)?,
                switches: row.get(16)?,
            },
        })
    }

    fn into_record(self) -> Result<PatternRecord, StorageError> {
        Ok(PatternRecord {
            recorded_at: from_epoch(self.round, self.recorded_at)?,
            round: self.round,
            group_range: self.group_range,
            pair: self.pair,
            pair_result: self.pair_result,
            triple: self.triple,
            triple_result: self.triple_result,
            link: RecordLink {
                prev_pair: self.prev_pair,
                prev_triple: self.prev_triple,
                transition: self.transition,
                transition_count: self.transition_count,
            },
            pair_profile: self.pair_profile,
            triple_profile: self.triple_profile,
        })
    }
}

/// Insert a linked draft. Returns the assigned round.
pub fn insert(conn: &Connection, draft: &RecordDraft, link: &RecordLink) -> Result<i64, StorageError> {
    let pair = draft.pair();
    let triple = draft.triple();
    let pair_profile = CodeProfile::of(&pair);
    let triple_profile = CodeProfile::of(&triple);

    conn.prepare_cached(
        "INSERT INTO pattern_records
            (recorded_at, group_range, pair, pair_result, triple, triple_result,
             prev_pair, prev_triple, transition, transition_count,
             pair_a_count, pair_b_count, pair_switches,
             triple_a_count, triple_b_count, triple_switches)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
    )
    .and_then(|mut stmt| {
        stmt.execute(params![
            draft.recorded_at.timestamp(),
            draft.group_range,
            pair,
            draft.pair_result(),
            triple,
            draft.triple_result(),
            link.prev_pair,
            link.prev_triple,
            link.transition,
            link.transition_count,
            pair_profile.a_count,
            pair_profile.b_count,
            pair_profile.switches,
            triple_profile.a_count,
            triple_profile.b_count,
            triple_profile.switches,
        ])
    })
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    Ok(conn.last_insert_rowid())
}

/// The most recently appended record.
pub fn latest(conn: &Connection) -> Result<Option<PatternRecord>, StorageError> {
    query_recent(conn, 1).map(|rows| rows.into_iter().next())
}

/// Transition count stored on the latest record with this transition.
pub fn latest_transition_count(
    conn: &Connection,
    transition: &str,
) -> Result<Option<u32>, StorageError> {
    conn.query_row(
        "SELECT transition_count FROM pattern_records
         WHERE transition = ?1 ORDER BY round DESC LIMIT 1",
        params![transition],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

pub fn count(conn: &Connection) -> Result<u64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM pattern_records", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Records with `recorded_at >= since_secs`.
pub fn count_since(conn: &Connection, since_secs: i64) -> Result<u64, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM pattern_records WHERE recorded_at >= ?1",
        params![since_secs],
        |row| row.get(0),
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Up to `limit` records, newest first.
pub fn query_recent(conn: &Connection, limit: usize) -> Result<Vec<PatternRecord>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {SELECT_COLUMNS} FROM pattern_records ORDER BY round DESC LIMIT ?1"
        ))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let rows = stmt
        .query_map(params![sql_limit(limit)], PatternRow::read)
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    rows.into_iter().map(PatternRow::into_record).collect()
}
