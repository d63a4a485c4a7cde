//! Statistics entry points over a history store.
//!
//! Statistics are observational: store faults are logged and reported as
//! "nothing available" rather than propagated.

use chrono::{DateTime, Utc};
use serde::Serialize;

use beadroad_core::config::StatisticsConfig;
use beadroad_core::errors::StorageError;
use beadroad_core::history::{PatternRecord, SummaryRecord};
use beadroad_core::traits::HistoryStore;

use super::buckets::{pair_buckets, triple_buckets};
use super::sampling::select_sample;
use super::types::{PatternStatistics, SamplingPolicy};

/// Compute ranked tables, propagating store errors.
pub fn try_collect_statistics(
    store: &dyn HistoryStore,
    now: DateTime<Utc>,
    policy: &SamplingPolicy,
) -> Result<PatternStatistics, StorageError> {
    let sample = select_sample(store, now, policy)?;
    Ok(PatternStatistics {
        total_records: sample.total_records,
        sample_size: sample.records.len(),
        policy: sample.policy,
        pair_buckets: pair_buckets(&sample.records),
        triple_buckets: triple_buckets(&sample.records),
    })
}

/// Compute ranked tables, or `None` when the history cannot be read.
pub fn collect_statistics(
    store: &dyn HistoryStore,
    now: DateTime<Utc>,
    policy: &SamplingPolicy,
) -> Option<PatternStatistics> {
    match try_collect_statistics(store, now, policy) {
        Ok(stats) => Some(stats),
        Err(e) => {
            tracing::warn!(error = %e, "statistics unavailable");
            None
        }
    }
}

/// The latest records and board summaries, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentActivity {
    pub records: Vec<PatternRecord>,
    pub summaries: Vec<SummaryRecord>,
}

pub fn recent_activity(store: &dyn HistoryStore, limit: usize) -> Option<RecentActivity> {
    let read = || -> Result<RecentActivity, StorageError> {
        Ok(RecentActivity {
            records: store.recent(limit)?,
            summaries: store.recent_summaries(limit)?,
        })
    };
    match read() {
        Ok(activity) => Some(activity),
        Err(e) => {
            tracing::warn!(error = %e, "recent activity unavailable");
            None
        }
    }
}

/// Recent activity sized by `[statistics] recent_display`.
pub fn configured_recent_activity(
    store: &dyn HistoryStore,
    config: &StatisticsConfig,
) -> Option<RecentActivity> {
    recent_activity(store, config.effective_recent_display())
}
