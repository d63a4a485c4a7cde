//! Storage-layer errors for the history log.

use super::error_code::{self, BeadroadErrorCode};

/// Errors raised by history store implementations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("History store unavailable: {message}")]
    Unavailable { message: String },

    #[error("Corrupt history row {round}: {message}")]
    CorruptRow { round: i64, message: String },
}

impl BeadroadErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            _ => error_code::STORAGE_ERROR,
        }
    }
}
