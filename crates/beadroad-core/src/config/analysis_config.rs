//! Analysis configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ZONE_WIDTH;

/// Configuration for zone decomposition and classification.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Zone width in columns. Default: 3.
    pub zone_width: Option<usize>,
}

impl AnalysisConfig {
    /// Returns the effective zone width, defaulting to 3.
    pub fn effective_zone_width(&self) -> usize {
        self.zone_width.unwrap_or(DEFAULT_ZONE_WIDTH)
    }
}
