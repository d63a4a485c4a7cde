//! End-to-end analysis runs and recording.

use beadroad_analysis::classify::Taxonomy;
use beadroad_analysis::pipeline::{BoardAnalyzer, Recorder};
use beadroad_analysis::stats::{collect_statistics, SamplingPolicy};
use beadroad_core::config::BeadroadConfig;
use beadroad_core::errors::{AnalysisError, StorageError};
use beadroad_core::history::{
    HistorySnapshot, PatternRecord, RecordDraft, SummaryDraft, SummaryRecord,
};
use beadroad_core::traits::HistoryStore;
use beadroad_core::types::{Grid, Outcome};
use beadroad_storage::{MemoryHistoryStore, SqliteHistoryStore};
use chrono::{DateTime, TimeZone, Utc};

const TAXONOMY_JSON: &str = r#"{
    "patterns": {
        "groupA": [{"sequence": "BBBBBB"}],
        "groupB": [{"sequence": "PPPPPP"}]
    }
}"#;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 19, 14, 7, 33).unwrap()
}

fn analyzer() -> BoardAnalyzer {
    BoardAnalyzer::new(Taxonomy::from_json_str(TAXONOMY_JSON).unwrap(), 3)
}

/// Columns 0-3 full, with a tie at (2,5) that resolves to P.
fn board() -> Grid {
    Grid::from_columns(&["BBBPPP", "BBBPPP", "BBBPPT", "BBBPPP"])
}

#[test]
fn test_analyze_keeps_both_grids_and_summarises() {
    let analysis = analyzer().analyze(&board());

    assert_eq!(analysis.original.get(2, 5), Outcome::Tie);
    assert_eq!(analysis.resolved.get(2, 5), Outcome::Player);
    assert_eq!(analysis.zones.len(), 4);

    let first = &analysis.zones[0].classification;
    assert_eq!(first.group_range, "1-3");
    assert_eq!(first.triple_code.as_ref().unwrap().to_string(), "aba");
    assert_eq!(first.quad_code.as_ref().unwrap().to_string(), "abab");

    // Zones 1-3 and 2-4 compose; 3-5 and 4-6 hit empty columns.
    assert_eq!(analysis.summary, "abab");
    assert!(analysis.zones[2].classification.triple_code.is_none());
}

#[test]
fn test_zone_report_shorthand_follows_its_classification() {
    let analysis = analyzer().analyze(&board());
    let shorthands: Vec<Option<&str>> = analysis
        .zones
        .iter()
        .map(|z| z.pair_shorthand.as_deref())
        .collect();
    assert_eq!(shorthands, vec![Some("ab"), Some("ab"), None, None]);
    for zone in &analysis.zones {
        assert_eq!(zone.pair_shorthand, zone.classification.pair_shorthand());
    }
}

#[test]
fn test_record_drafts_skip_zones_without_composites() {
    let analysis = analyzer().analyze(&board());
    let drafts = analysis.record_drafts(now());
    assert_eq!(drafts.len(), 2);
    assert_eq!(drafts[1].group_range, "2-4");
    assert_eq!(drafts[0].recorded_at.timestamp() % 60, 0);

    let summary = analysis.summary_draft(now()).unwrap();
    assert_eq!(summary.summary, "abab");

    let blank = analyzer().analyze(&Grid::new());
    assert!(blank.zones.is_empty());
    assert!(blank.record_drafts(now()).is_empty());
    assert!(blank.summary_draft(now()).is_none());
}

#[test]
fn test_recorder_saves_to_sqlite_and_feeds_statistics() {
    let store = SqliteHistoryStore::open_in_memory().unwrap();
    let analysis = analyzer().analyze(&board());

    let result = Recorder::new(&store).save(&analysis, now());
    assert!(result.is_clean());
    assert_eq!(result.data.records.len(), 2);
    assert_eq!(
        result.data.records[1].link.transition.as_deref(),
        Some("ab->ab")
    );
    assert_eq!(result.data.summary.as_ref().unwrap().summary, "abab");

    let stats = collect_statistics(&store, now(), &SamplingPolicy::default()).unwrap();
    assert_eq!(stats.total_records, 2);
    assert_eq!(stats.pair_buckets[0].key, "ab");
    assert_eq!(stats.pair_buckets[0].entries[0].count, 2);
}

#[test]
fn test_repeated_saves_count_transitions() {
    let store = MemoryHistoryStore::new();
    let analysis = analyzer().analyze(&board());
    let recorder = Recorder::new(&store);
    recorder.save(&analysis, now());
    let second = recorder.save(&analysis, now());

    let counts: Vec<u32> = second
        .data
        .records
        .iter()
        .map(|r| r.link.transition_count)
        .collect();
    assert_eq!(counts, vec![2, 3]);
    assert_eq!(store.count_all().unwrap(), 4);
}

struct OfflineStore;

fn offline<T>() -> Result<T, StorageError> {
    Err(StorageError::Unavailable {
        message: "offline".to_string(),
    })
}

impl HistoryStore for OfflineStore {
    fn append(&self, _: &RecordDraft) -> Result<PatternRecord, StorageError> {
        offline()
    }
    fn count_all(&self) -> Result<u64, StorageError> {
        offline()
    }
    fn count_since(&self, _: DateTime<Utc>) -> Result<u64, StorageError> {
        offline()
    }
    fn recent(&self, _: usize) -> Result<Vec<PatternRecord>, StorageError> {
        offline()
    }
    fn snapshot(&self, _: DateTime<Utc>, _: usize) -> Result<HistorySnapshot, StorageError> {
        offline()
    }
    fn append_summary(&self, _: &SummaryDraft) -> Result<SummaryRecord, StorageError> {
        offline()
    }
    fn recent_summaries(&self, _: usize) -> Result<Vec<SummaryRecord>, StorageError> {
        offline()
    }
}

#[test]
fn test_store_failures_are_collected_not_raised() {
    let analysis = analyzer().analyze(&board());
    let result = Recorder::new(&OfflineStore).save(&analysis, now());
    assert_eq!(result.error_count(), 3);
    assert!(result.data.records.is_empty());
    assert!(result.data.summary.is_none());
    assert!(matches!(result.errors[0], AnalysisError::Storage(_)));
}

#[test]
fn test_from_config_with_missing_taxonomy_still_runs() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = BeadroadConfig::default();
    config.taxonomy.path = Some(dir.path().join("missing.json"));
    config.analysis.zone_width = Some(4);

    let analyzer = BoardAnalyzer::from_config(&config);
    assert_eq!(analyzer.zone_width(), 4);
    assert!(analyzer.classifier().taxonomy().is_empty());

    let analysis = analyzer.analyze(&board());
    assert!(!analysis.zones.is_empty());
    assert!(analysis.record_drafts(now()).is_empty());
}

#[test]
fn test_from_config_loads_taxonomy_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pattern.json");
    std::fs::write(&path, TAXONOMY_JSON).unwrap();

    let mut config = BeadroadConfig::default();
    config.taxonomy.path = Some(path);
    let analysis = BoardAnalyzer::from_config(&config).analyze(&board());
    assert_eq!(analysis.summary, "abab");
}
