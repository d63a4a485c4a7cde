//! Transaction helpers: immediate writes and snapshot reads.

use beadroad_core::errors::StorageError;
use rusqlite::{Connection, Transaction, TransactionBehavior};

/// Run `f` inside a `BEGIN IMMEDIATE` transaction.
///
/// The write lock is taken up front, so the read-then-insert inside `f` sees
/// the log exactly as it stands at commit. Any error rolls the whole
/// transaction back.
pub fn with_immediate_transaction<F, T>(conn: &Connection, f: F) -> Result<T, StorageError>
where
    F: FnOnce(&Transaction<'_>) -> Result<T, StorageError>,
{
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate).map_err(|e| {
        StorageError::SqliteError {
            message: format!("failed to begin immediate transaction: {e}"),
        }
    })?;

    // Dropping `tx` on the error path rolls back.
    let result = f(&tx)?;

    tx.commit().map_err(|e| StorageError::SqliteError {
        message: format!("failed to commit: {e}"),
    })?;

    Ok(result)
}

/// Run `f` inside a deferred transaction so every query in it reads the same
/// snapshot of the database. Under WAL, concurrent writers do not block it.
pub fn with_read_transaction<F, T>(conn: &Connection, f: F) -> Result<T, StorageError>
where
    F: FnOnce(&Transaction<'_>) -> Result<T, StorageError>,
{
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Deferred).map_err(|e| {
        StorageError::SqliteError {
            message: format!("failed to begin read transaction: {e}"),
        }
    })?;

    let result = f(&tx)?;

    tx.commit().map_err(|e| StorageError::SqliteError {
        message: format!("failed to end read transaction: {e}"),
    })?;

    Ok(result)
}
