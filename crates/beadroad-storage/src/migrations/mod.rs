//! Schema migrations, tracked through `PRAGMA user_version`.

pub mod v001_initial;

use beadroad_core::errors::StorageError;
use rusqlite::Connection;

/// Ordered `(version, sql)` pairs.
const MIGRATIONS: &[(u32, &str)] = &[(1, v001_initial::MIGRATION_SQL)];

/// Latest schema version this build knows.
pub const LATEST_VERSION: u32 = 1;

pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })
}

/// Apply every migration newer than the stored version. Each step runs in
/// its own transaction together with the version bump.
pub fn run_migrations(conn: &Connection) -> Result<u32, StorageError> {
    let start = current_version(conn)?;
    let mut version = start;

    for &(target, sql) in MIGRATIONS.iter().filter(|(v, _)| *v > start) {
        let failed = |e: rusqlite::Error| StorageError::MigrationFailed {
            version: target,
            message: e.to_string(),
        };
        let tx = conn.unchecked_transaction().map_err(failed)?;
        tx.execute_batch(sql).map_err(failed)?;
        tx.pragma_update(None, "user_version", target)
            .map_err(failed)?;
        tx.commit().map_err(failed)?;

        tracing::info!(version = target, "applied history schema migration");
        version = target;
    }

    Ok(version)
}
