//! Taxonomy loading errors.

use super::error_code::{self, BeadroadErrorCode};

/// Errors raised while reading or validating a pattern taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("Failed to read taxonomy {path}: {message}")]
    Io { path: String, message: String },

    #[error("Taxonomy parse error in {source_name}: {message}")]
    Parse { source_name: String, message: String },

    #[error("Invalid taxonomy entry {index} in {group}: {message}")]
    InvalidEntry {
        group: String,
        index: usize,
        message: String,
    },
}

impl BeadroadErrorCode for TaxonomyError {
    fn error_code(&self) -> &'static str {
        error_code::TAXONOMY_ERROR
    }
}
