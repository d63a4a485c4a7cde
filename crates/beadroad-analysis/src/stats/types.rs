//! Statistics value types.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use beadroad_core::config::StatisticsConfig;
use beadroad_core::constants::{DEFAULT_RECENT_WINDOW_MINUTES, DEFAULT_SAMPLE_LIMIT};
use beadroad_core::history::PatternRecord;

/// Which slice of the history a statistics run was computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplePolicy {
    /// The history is small enough to use whole.
    Full,
    /// Every record inside the recency window.
    RecentWindow,
    /// The most recent `limit` records.
    RecentLimit,
}

/// Sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingPolicy {
    /// History size threshold and fallback sample size.
    pub limit: usize,
    pub window_minutes: u32,
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SAMPLE_LIMIT,
            window_minutes: DEFAULT_RECENT_WINDOW_MINUTES,
        }
    }
}

impl SamplingPolicy {
    pub fn from_config(config: &StatisticsConfig) -> Self {
        Self {
            limit: config.effective_sample_limit(),
            window_minutes: config.effective_recent_window_minutes(),
        }
    }

    pub fn window(&self) -> Duration {
        Duration::minutes(i64::from(self.window_minutes))
    }

    /// Start of the recency window ending at `now`.
    pub fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.window()
    }
}

/// Records chosen for one statistics run.
#[derive(Debug, Clone)]
pub struct Sample {
    pub policy: SamplePolicy,
    pub total_records: u64,
    /// Newest first.
    pub records: Vec<PatternRecord>,
}

/// A distinct code and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyRecord {
    pub code: String,
    pub count: u32,
}

/// A frequency record weighted against its bucket total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeShare {
    pub code: String,
    pub count: u32,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum BucketShares {
    NoData,
    Rows(Vec<CodeShare>),
}

/// Codes sharing one fixed prefix, ranked by count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub key: String,
    pub entries: Vec<FrequencyRecord>,
}

impl Bucket {
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Count of the highest-ranked entry; 0 for an empty bucket.
    pub fn top_count(&self) -> u32 {
        self.entries.first().map_or(0, |e| e.count)
    }

    pub fn shares(&self) -> BucketShares {
        let total = self.total();
        if total == 0 {
            return BucketShares::NoData;
        }
        BucketShares::Rows(
            self.entries
                .iter()
                .map(|e| CodeShare {
                    code: e.code.clone(),
                    count: e.count,
                    percent: f64::from(e.count) / f64::from(total) * 100.0,
                })
                .collect(),
        )
    }
}

/// Ranked frequency tables over a history sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternStatistics {
    pub total_records: u64,
    pub sample_size: usize,
    pub policy: SamplePolicy,
    /// 3-codes grouped by their 2-symbol prefix.
    pub pair_buckets: Vec<Bucket>,
    /// 4-codes grouped by their 3-symbol prefix.
    pub triple_buckets: Vec<Bucket>,
}
