//! Statistics sampling configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_RECENT_DISPLAY, DEFAULT_RECENT_WINDOW_MINUTES, DEFAULT_SAMPLE_LIMIT,
};

/// Configuration for the statistics aggregator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StatisticsConfig {
    /// History size threshold and fixed-size fallback sample. Default: 100.
    pub sample_limit: Option<usize>,
    /// Recency window in minutes. Default: 180.
    pub recent_window_minutes: Option<u32>,
    /// Records returned by recent-activity views. Default: 3.
    pub recent_display: Option<usize>,
}

impl StatisticsConfig {
    /// Returns the effective sample limit, defaulting to 100.
    pub fn effective_sample_limit(&self) -> usize {
        self.sample_limit.unwrap_or(DEFAULT_SAMPLE_LIMIT)
    }

    /// Returns the effective recency window, defaulting to 180 minutes.
    pub fn effective_recent_window_minutes(&self) -> u32 {
        self.recent_window_minutes
            .unwrap_or(DEFAULT_RECENT_WINDOW_MINUTES)
    }

    pub fn effective_recent_display(&self) -> usize {
        self.recent_display.unwrap_or(DEFAULT_RECENT_DISPLAY)
    }
}
