//! Tie resolver and zone decomposer properties.

use beadroad_analysis::board::{decompose, majority_vote, resolve_ties};
use beadroad_core::constants::{BOARD_COLUMNS, BOARD_ROWS};
use beadroad_core::types::{Grid, Outcome};
use proptest::prelude::*;

fn grid_from(cells: &[Outcome]) -> Grid {
    let mut grid = Grid::new();
    for (i, value) in cells.iter().enumerate() {
        grid.set(i / BOARD_ROWS, i % BOARD_ROWS, *value);
    }
    grid
}

fn any_outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        Just(Outcome::Empty),
        Just(Outcome::Banker),
        Just(Outcome::Player),
        Just(Outcome::Tie),
    ]
}

fn tie_free_outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        Just(Outcome::Empty),
        Just(Outcome::Banker),
        Just(Outcome::Player),
    ]
}

fn board(cell: impl Strategy<Value = Outcome>) -> impl Strategy<Value = Grid> {
    prop::collection::vec(cell, BOARD_COLUMNS * BOARD_ROWS).prop_map(|cells| grid_from(&cells))
}

proptest! {
    #[test]
    fn tie_free_boards_are_unchanged(grid in board(tie_free_outcome())) {
        prop_assert_eq!(resolve_ties(&grid), grid);
    }

    #[test]
    fn resolution_removes_every_tie(grid in board(any_outcome())) {
        let resolved = resolve_ties(&grid);
        prop_assert_eq!(resolved.count(Outcome::Tie), 0);
        for (col, row, original) in grid.cells() {
            let value = resolved.get(col, row);
            match original {
                Outcome::Tie => prop_assert!(value.is_decided()),
                other => prop_assert_eq!(value, other),
            }
        }
    }

    #[test]
    fn resolution_is_idempotent(grid in board(any_outcome())) {
        let once = resolve_ties(&grid);
        prop_assert_eq!(resolve_ties(&once), once);
    }

    #[test]
    fn single_outcome_keeps_only_covering_zones(
        col in 0..BOARD_COLUMNS,
        row in 0..BOARD_ROWS,
        width in 1..=BOARD_COLUMNS,
    ) {
        let mut grid = Grid::new();
        grid.set(col, row, Outcome::Player);
        let zones = decompose(&grid, width);
        let expected: Vec<usize> = (0..=BOARD_COLUMNS - width)
            .filter(|start| (*start..start + width).contains(&col))
            .collect();
        let starts: Vec<usize> = zones.iter().map(|z| z.start()).collect();
        prop_assert_eq!(starts, expected);
    }
}

#[test]
fn test_two_of_three_neighbours_win() {
    // (1,2): left = B, upper-left = P, up = P
    let grid = Grid::from_columns(&["BPB", "BPT"]);
    assert_eq!(resolve_ties(&grid).get(1, 2), Outcome::Player);
}

#[test]
fn test_resolved_neighbour_counts_as_its_new_value() {
    // (1,1) resolves to B first; (1,2) then sees left = B, upper-left = P, up = B.
    let grid = Grid::from_columns(&["BPB", "BTT"]);
    let resolved = resolve_ties(&grid);
    assert_eq!(resolved.get(1, 1), Outcome::Banker);
    assert_eq!(resolved.get(1, 2), Outcome::Banker);
}

#[test]
fn test_split_vote_goes_to_left() {
    assert_eq!(
        majority_vote(&[Outcome::Banker, Outcome::Player, Outcome::Empty]),
        Some(Outcome::Banker)
    );
}

#[test]
fn test_original_grid_is_preserved() {
    let grid = Grid::from_columns(&["TBP", "PTB"]);
    let before = grid.clone();
    let resolved = resolve_ties(&grid);
    assert_eq!(grid, before);
    assert_ne!(resolved, grid);
}

#[test]
fn test_single_outcome_at_column_seven() {
    let mut grid = Grid::new();
    grid.set(7, 4, Outcome::Banker);
    let labels: Vec<String> = decompose(&grid, 3).iter().map(|z| z.range_label()).collect();
    assert_eq!(labels, vec!["6-8", "7-9", "8-10"]);
}
