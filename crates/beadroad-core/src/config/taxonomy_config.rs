//! Taxonomy source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TAXONOMY_PATH;

/// Where the pattern taxonomy is loaded from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Path to the taxonomy document (`.json` or `.toml`). Default: `pattern.json`.
    pub path: Option<PathBuf>,
}

impl TaxonomyConfig {
    pub fn effective_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TAXONOMY_PATH))
    }
}
