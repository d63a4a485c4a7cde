//! Prefix bucketing and ranking.

use rustc_hash::FxHashMap;

use beadroad_core::constants::{PAIR_BUCKETS, TRIPLE_BUCKETS};
use beadroad_core::history::PatternRecord;

use super::types::{Bucket, FrequencyRecord};

/// Group `codes` under the fixed `keys` by exact prefix and rank them.
///
/// Within a bucket, codes are ordered by count descending, then code.
/// Buckets are ordered by their top count descending; equal keys keep the
/// order of `keys`, so empty buckets trail in canonical order. Codes whose
/// prefix is not a key are dropped.
pub fn rank_buckets<I, S>(codes: I, keys: &[&str]) -> Vec<Bucket>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: FxHashMap<String, u32> = FxHashMap::default();
    for code in codes {
        *counts.entry(code.as_ref().to_string()).or_insert(0) += 1;
    }

    let mut buckets: Vec<Bucket> = keys
        .iter()
        .map(|key| {
            let mut entries: Vec<FrequencyRecord> = counts
                .iter()
                .filter(|(code, _)| code.len() > key.len() && code.starts_with(key))
                .map(|(code, &count)| FrequencyRecord {
                    code: code.clone(),
                    count,
                })
                .collect();
            entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.code.cmp(&b.code)));
            Bucket {
                key: (*key).to_string(),
                entries,
            }
        })
        .collect();

    buckets.sort_by(|a, b| b.top_count().cmp(&a.top_count()));
    buckets
}

/// 3-codes grouped by their pair prefix.
pub fn pair_buckets(records: &[PatternRecord]) -> Vec<Bucket> {
    rank_buckets(records.iter().filter_map(PatternRecord::pair_code), &PAIR_BUCKETS)
}

/// 4-codes grouped by their triple prefix.
pub fn triple_buckets(records: &[PatternRecord]) -> Vec<Bucket> {
    rank_buckets(
        records.iter().filter_map(PatternRecord::triple_code),
        &TRIPLE_BUCKETS,
    )
}
