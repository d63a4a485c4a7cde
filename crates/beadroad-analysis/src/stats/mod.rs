//! Statistics over the persisted classification history.

pub mod buckets;
pub mod collector;
pub mod sampling;
pub mod trend;
pub mod types;

pub use buckets::{pair_buckets, rank_buckets, triple_buckets};
pub use collector::{
    collect_statistics, configured_recent_activity, recent_activity, try_collect_statistics,
    RecentActivity,
};
pub use sampling::{choose_policy, select_sample};
pub use trend::{hourly_pair_trend, pair_trend, HourlyShare};
pub use types::{
    Bucket, BucketShares, CodeShare, FrequencyRecord, PatternStatistics, Sample, SamplePolicy,
    SamplingPolicy,
};
