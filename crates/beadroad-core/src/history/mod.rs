//! History log record model: persisted pattern records and board summaries.

pub mod record;
pub mod snapshot;
pub mod summary;
pub mod time;

pub use record::{CodeProfile, PatternRecord, RecordDraft, RecordLink};
pub use snapshot::HistorySnapshot;
pub use summary::{SummaryDraft, SummaryRecord};
pub use time::{minute_label, truncate_to_hour, truncate_to_minute};
