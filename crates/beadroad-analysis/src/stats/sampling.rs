//! Recency-versus-volume sample selection.

use chrono::{DateTime, Utc};

use beadroad_core::errors::StorageError;
use beadroad_core::traits::HistoryStore;

use super::types::{Sample, SamplePolicy, SamplingPolicy};

/// Decide the policy from the history size and the recent-window count.
///
/// Small histories are used whole. Otherwise the recency window wins when it
/// alone exceeds the limit, else the most recent `limit` records are used.
pub fn choose_policy(total: u64, recent: u64, limit: usize) -> SamplePolicy {
    let limit = limit as u64;
    if total <= limit {
        SamplePolicy::Full
    } else if recent > limit {
        SamplePolicy::RecentWindow
    } else {
        SamplePolicy::RecentLimit
    }
}

/// Pick the records a statistics run is computed over.
///
/// Counts and records come from one store snapshot, so an append that lands
/// mid-run cannot change the sample after the policy was chosen.
pub fn select_sample(
    store: &dyn HistoryStore,
    now: DateTime<Utc>,
    policy: &SamplingPolicy,
) -> Result<Sample, StorageError> {
    let since = policy.window_start(now);
    let snapshot = store.snapshot(since, policy.limit)?;
    let total_records = snapshot.total;
    let chosen = choose_policy(total_records, snapshot.recent_count, policy.limit);

    let records: Vec<_> = match chosen {
        SamplePolicy::Full => snapshot.records,
        SamplePolicy::RecentLimit => snapshot.records.into_iter().take(policy.limit).collect(),
        SamplePolicy::RecentWindow => snapshot
            .records
            .into_iter()
            .filter(|r| r.recorded_at >= since)
            .collect(),
    };

    tracing::debug!(
        total_records,
        sample = records.len(),
        policy = ?chosen,
        "selected statistics sample"
    );

    Ok(Sample {
        policy: chosen,
        total_records,
        records,
    })
}
