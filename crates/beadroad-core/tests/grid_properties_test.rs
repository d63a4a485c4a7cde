use beadroad_core::constants::{BOARD_COLUMNS, BOARD_ROWS};
use beadroad_core::types::{Grid, Outcome};
use proptest::prelude::*;

fn outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        Just(Outcome::Empty),
        Just(Outcome::Banker),
        Just(Outcome::Player),
        Just(Outcome::Tie),
    ]
}

proptest! {
    #[test]
    fn writes_land_only_in_bounds(col in 0usize..30, row in 0usize..12, value in outcome()) {
        let mut grid = Grid::new();
        let stored = grid.set(col, row, value);
        prop_assert_eq!(stored, col < BOARD_COLUMNS && row < BOARD_ROWS);
        if stored {
            prop_assert_eq!(grid.get(col, row), value);
        } else {
            prop_assert!(grid.is_blank());
        }
    }

    #[test]
    fn display_parses_back(cells in prop::collection::vec(outcome(), BOARD_COLUMNS * BOARD_ROWS)) {
        let mut grid = Grid::new();
        for (i, value) in cells.iter().enumerate() {
            grid.set(i / BOARD_ROWS, i % BOARD_ROWS, *value);
        }
        let rendered = grid.to_string();
        let rows: Vec<Vec<char>> = rendered.lines().map(|l| l.chars().collect()).collect();
        let columns: Vec<String> = (0..BOARD_COLUMNS)
            .map(|c| rows.iter().map(|r| r[c]).collect())
            .collect();
        prop_assert_eq!(Grid::from_columns(&columns), grid);
    }
}
