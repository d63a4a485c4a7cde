//! Error code mapping and non-fatal error collection.

use beadroad_core::errors::{
    AnalysisError, BeadroadErrorCode, ConfigError, RunResult, StorageError, TaxonomyError,
};

#[test]
fn subsystem_codes() {
    let e = StorageError::SqliteError { message: "disk I/O".into() };
    assert_eq!(e.error_code(), "STORAGE_ERROR");
    assert_eq!(e.coded_string(), "[STORAGE_ERROR] SQLite error: disk I/O");

    let e = StorageError::MigrationFailed { version: 1, message: "boom".into() };
    assert_eq!(e.error_code(), "MIGRATION_FAILED");

    let e = TaxonomyError::Parse { source_name: "pattern.json".into(), message: "eof".into() };
    assert_eq!(e.error_code(), "TAXONOMY_ERROR");

    let e = ConfigError::FileNotFound { path: "x".into() };
    assert_eq!(e.error_code(), "CONFIG_ERROR");
}

#[test]
fn analysis_error_forwards_wrapped_code() {
    let e: AnalysisError = StorageError::Unavailable { message: "closed".into() }.into();
    assert_eq!(e.error_code(), "STORAGE_ERROR");
    assert!(e.to_string().starts_with("Storage error:"));
}

#[test]
fn run_result_collects_errors() {
    let mut result: RunResult<u32> = RunResult::new(7);
    assert!(result.is_clean());
    result.add_error(StorageError::Unavailable { message: "a".into() });
    result.add_error(ConfigError::FileNotFound { path: "b".into() });
    assert_eq!(result.error_count(), 2);
    assert_eq!(result.data, 7);
}
