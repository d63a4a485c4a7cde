//! Hourly pair distribution.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use beadroad_core::constants::PAIR_BUCKETS;
use beadroad_core::history::{truncate_to_hour, PatternRecord};
use beadroad_core::traits::HistoryStore;

use super::types::CodeShare;

/// Pair split for one UTC hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyShare {
    pub hour: DateTime<Utc>,
    pub total: u32,
    /// One row per pair bucket, canonical order.
    pub shares: Vec<CodeShare>,
}

impl HourlyShare {
    pub fn percent(&self, pair: &str) -> f64 {
        self.shares
            .iter()
            .find(|s| s.code == pair)
            .map_or(0.0, |s| s.percent)
    }
}

/// Per-hour percentage split of stored pairs, oldest hour first.
/// Hours without a bucketed pair are omitted.
pub fn hourly_pair_trend(records: &[PatternRecord]) -> Vec<HourlyShare> {
    let mut hours: BTreeMap<DateTime<Utc>, [u32; PAIR_BUCKETS.len()]> = BTreeMap::new();
    for record in records {
        let Some(slot) = PAIR_BUCKETS.iter().position(|k| *k == record.pair) else {
            continue;
        };
        hours.entry(truncate_to_hour(record.recorded_at)).or_default()[slot] += 1;
    }

    hours
        .into_iter()
        .map(|(hour, counts)| {
            let total: u32 = counts.iter().sum();
            let shares = PAIR_BUCKETS
                .iter()
                .zip(counts)
                .map(|(code, count)| CodeShare {
                    code: (*code).to_string(),
                    count,
                    percent: f64::from(count) / f64::from(total) * 100.0,
                })
                .collect();
            HourlyShare {
                hour,
                total,
                shares,
            }
        })
        .collect()
}

/// Hourly trend over the whole history; `None` when the store fails.
pub fn pair_trend(store: &dyn HistoryStore) -> Option<Vec<HourlyShare>> {
    match store.all() {
        Ok(records) => Some(hourly_pair_trend(&records)),
        Err(e) => {
            tracing::warn!(error = %e, "pair trend unavailable");
            None
        }
    }
}
