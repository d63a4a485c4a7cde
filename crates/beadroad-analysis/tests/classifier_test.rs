//! Pattern classification against a loaded taxonomy.

use std::io::Write;

use beadroad_analysis::board::{decompose, resolve_ties};
use beadroad_analysis::classify::{PatternClassifier, Taxonomy};
use beadroad_core::types::{Grid, GroupTag, Outcome};

const TAXONOMY_JSON: &str = r#"{
    "patterns": {
        "groupA": [{"sequence": ["B","B","B","B","B","B"], "group": "a"}],
        "groupB": [{"sequence": ["P","P","P","P","P","P"]}]
    }
}"#;

fn classifier() -> PatternClassifier {
    PatternClassifier::new(Taxonomy::from_json_str(TAXONOMY_JSON).unwrap())
}

/// Templates 1-3 classify a, b, a; template 4 has a gap.
fn aba_board() -> Grid {
    Grid::from_columns(&["BBBPPP", "BBBPPP", "BBBPP"])
}

#[test]
fn test_three_code_survives_failed_fourth_template() {
    let zones = decompose(&aba_board(), 3);
    let result = classifier().classify_zone(&zones[0]);

    let tags: Vec<Option<GroupTag>> = result.templates.iter().map(|t| t.tag).collect();
    assert_eq!(
        tags,
        vec![Some(GroupTag::A), Some(GroupTag::B), Some(GroupTag::A), None]
    );
    assert_eq!(result.triple_code.as_ref().unwrap().to_string(), "aba");
    assert!(result.quad_code.is_none());
    assert_eq!(result.pair_shorthand().as_deref(), Some("ab"));
}

#[test]
fn test_gap_sequence_is_sampled_in_place() {
    let zones = decompose(&aba_board(), 3);
    let c = classifier();
    let fourth = c.positions_in(&zones[0]).nth(3).unwrap();
    let sampled = c.sample(&zones[0], fourth);
    assert_eq!(sampled[5], Outcome::Empty);
    assert_eq!(sampled[4], Outcome::Player);
}

#[test]
fn test_reclassification_is_idempotent() {
    let grid = resolve_ties(&Grid::from_columns(&[
        "BBBPPP", "BBBPPP", "BBBPPT", "BBBBBB", "PPPPPP",
    ]));
    let zones = decompose(&grid, 3);
    let c = classifier();

    let first: Vec<_> = zones.iter().map(|z| c.classify_zone(z)).collect();
    let second: Vec<_> = zones.iter().map(|z| c.classify_zone(z)).collect();
    assert_eq!(first, second);
    assert_eq!(c.board_summary(&zones), c.board_summary(&zones));
}

#[test]
fn test_empty_taxonomy_classifies_nothing() {
    let zones = decompose(&aba_board(), 3);
    let c = PatternClassifier::new(Taxonomy::empty());
    assert!(zones.iter().all(|z| !c.classify_zone(z).has_composite()));
    assert_eq!(c.board_summary(&zones), "");
}

#[test]
fn test_load_taxonomy_files() {
    let dir = tempfile::tempdir().unwrap();

    let json_path = dir.path().join("pattern.json");
    std::fs::File::create(&json_path)
        .unwrap()
        .write_all(TAXONOMY_JSON.as_bytes())
        .unwrap();
    assert_eq!(Taxonomy::load_from_file(&json_path).unwrap().len(), 2);

    let toml_path = dir.path().join("pattern.toml");
    std::fs::write(
        &toml_path,
        "[[patterns.groupA]]\nsequence = \"BPBPBP\"\ngroup = \"b\"\n",
    )
    .unwrap();
    let taxonomy = Taxonomy::load_from_file(&toml_path).unwrap();
    assert_eq!(
        taxonomy.lookup(&[
            Outcome::Banker,
            Outcome::Player,
            Outcome::Banker,
            Outcome::Player,
            Outcome::Banker,
            Outcome::Player,
        ]),
        Some(GroupTag::B)
    );
}

#[test]
fn test_missing_taxonomy_fails_closed() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    assert!(Taxonomy::load_from_file(&missing).is_err());
    assert!(Taxonomy::load_or_empty(&missing).is_empty());
}

#[test]
fn test_malformed_entry_keeps_the_rest_of_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pattern.json");
    std::fs::write(
        &path,
        r#"{"patterns": {"groupA": [{"sequence": "BBBBBB"}, {"sequence": "BPTBPB"}]}}"#,
    )
    .unwrap();

    let taxonomy = Taxonomy::load_or_empty(&path);
    assert_eq!(taxonomy.len(), 1);
    assert_eq!(taxonomy.lookup(&[Outcome::Banker; 6]), Some(GroupTag::A));

    // Six decided cells matching the surviving entry still classify.
    let classifier = PatternClassifier::new(taxonomy);
    assert_eq!(
        classifier.classify_sequence(&[Outcome::Banker; 6]),
        Some(GroupTag::A)
    );
}
