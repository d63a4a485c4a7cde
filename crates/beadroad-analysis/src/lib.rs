//! Bead-road analysis engine.
//!
//! Resolves tie cells, decomposes the board into overlapping zones,
//! classifies pattern positions against a taxonomy, and aggregates the
//! persisted classification history into ranked frequency tables.

pub mod board;
pub mod classify;
pub mod pipeline;
pub mod stats;

pub use board::{decompose, resolve_ties, Zone};
pub use classify::{PatternClassifier, Taxonomy, ZoneClassification};
pub use pipeline::{BoardAnalysis, BoardAnalyzer, Recorder, SaveReport, ZoneReport};
pub use stats::{collect_statistics, PatternStatistics, SamplingPolicy};
