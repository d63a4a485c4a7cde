//! One analysis run over a board snapshot.

use chrono::{DateTime, Utc};
use serde::Serialize;

use beadroad_core::config::BeadroadConfig;
use beadroad_core::history::{RecordDraft, SummaryDraft};
use beadroad_core::types::Grid;

use crate::board::{decompose, resolve_ties};
use crate::classify::{PatternClassifier, Taxonomy, ZoneClassification};

/// Per-zone output of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneReport {
    pub classification: ZoneClassification,
    pub pair_shorthand: Option<String>,
}

impl From<ZoneClassification> for ZoneReport {
    fn from(classification: ZoneClassification) -> Self {
        Self {
            pair_shorthand: classification.pair_shorthand(),
            classification,
        }
    }
}

/// Everything a run derives from one board. The original and resolved grids
/// are kept side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardAnalysis {
    pub original: Grid,
    pub resolved: Grid,
    pub zones: Vec<ZoneReport>,
    pub summary: String,
}

impl BoardAnalysis {
    /// One draft per zone that produced at least one composite.
    pub fn record_drafts(&self, now: DateTime<Utc>) -> Vec<RecordDraft> {
        self.zones
            .iter()
            .map(|z| &z.classification)
            .filter(|c| c.has_composite())
            .map(|c| {
                RecordDraft::new(
                    now,
                    c.group_range.clone(),
                    c.triple_code.clone(),
                    c.quad_code.clone(),
                )
            })
            .collect()
    }

    /// The board summary draft, if any zone produced a shorthand.
    pub fn summary_draft(&self, now: DateTime<Utc>) -> Option<SummaryDraft> {
        (!self.summary.is_empty()).then(|| SummaryDraft::new(now, self.summary.clone()))
    }
}

/// Runs tie resolution, decomposition and classification.
#[derive(Debug, Clone)]
pub struct BoardAnalyzer {
    classifier: PatternClassifier,
    zone_width: usize,
}

impl BoardAnalyzer {
    pub fn new(taxonomy: Taxonomy, zone_width: usize) -> Self {
        Self {
            classifier: PatternClassifier::new(taxonomy),
            zone_width,
        }
    }

    /// Build from configuration; the taxonomy is loaded fail-closed.
    pub fn from_config(config: &BeadroadConfig) -> Self {
        let taxonomy = Taxonomy::load_or_empty(&config.taxonomy.effective_path());
        Self::new(taxonomy, config.analysis.effective_zone_width())
    }

    pub fn classifier(&self) -> &PatternClassifier {
        &self.classifier
    }

    pub fn zone_width(&self) -> usize {
        self.zone_width
    }

    pub fn analyze(&self, grid: &Grid) -> BoardAnalysis {
        let resolved = resolve_ties(grid);
        let zones = decompose(&resolved, self.zone_width);

        let reports: Vec<ZoneReport> = zones
            .iter()
            .map(|zone| ZoneReport::from(self.classifier.classify_zone(zone)))
            .collect();
        let summary: String = reports
            .iter()
            .filter_map(|r| r.pair_shorthand.as_deref())
            .collect();

        tracing::info!(
            zones = reports.len(),
            composed = reports.iter().filter(|r| r.classification.triple_code.is_some()).count(),
            summary = %summary,
            "analyzed board"
        );

        BoardAnalysis {
            original: grid.clone(),
            resolved,
            zones: reports,
            summary,
        }
    }
}
