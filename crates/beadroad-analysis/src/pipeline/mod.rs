//! Board analysis runs and their persistence.

pub mod analyzer;
pub mod recorder;

pub use analyzer::{BoardAnalysis, BoardAnalyzer, ZoneReport};
pub use recorder::{Recorder, SaveReport};
