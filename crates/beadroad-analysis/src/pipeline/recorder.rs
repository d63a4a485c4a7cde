//! Persisting a board analysis to the history log.

use chrono::{DateTime, Utc};

use beadroad_core::errors::RunResult;
use beadroad_core::history::{PatternRecord, SummaryRecord};
use beadroad_core::traits::HistoryStore;

use super::analyzer::BoardAnalysis;

/// What a save actually wrote.
#[derive(Debug, Clone, Default)]
pub struct SaveReport {
    pub records: Vec<PatternRecord>,
    pub summary: Option<SummaryRecord>,
}

/// Appends analysis output to a history store. Each append stands alone;
/// a failed append is collected and the remaining ones still run.
pub struct Recorder<'s> {
    store: &'s dyn HistoryStore,
}

impl<'s> Recorder<'s> {
    pub fn new(store: &'s dyn HistoryStore) -> Self {
        Self { store }
    }

    pub fn save(&self, analysis: &BoardAnalysis, now: DateTime<Utc>) -> RunResult<SaveReport> {
        let mut result = RunResult::new(SaveReport::default());

        for draft in analysis.record_drafts(now) {
            match self.store.append(&draft) {
                Ok(record) => result.data.records.push(record),
                Err(e) => {
                    tracing::warn!(zone = %draft.group_range, error = %e, "failed to save pattern record");
                    result.add_error(e);
                }
            }
        }

        if let Some(draft) = analysis.summary_draft(now) {
            match self.store.append_summary(&draft) {
                Ok(record) => result.data.summary = Some(record),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to save board summary");
                    result.add_error(e);
                }
            }
        }

        tracing::debug!(
            saved = result.data.records.len(),
            errors = result.error_count(),
            "recorded board analysis"
        );
        result
    }
}
