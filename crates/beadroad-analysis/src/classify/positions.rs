//! Pattern position templates.
//!
//! A template covers two adjacent columns and one half of the board (rows
//! 0-2 or rows 3-5). Templates are enumerated across the whole board, top
//! then bottom for each column pair, numbered from 1.

use serde::Serialize;

use beadroad_core::constants::{
    BOARD_COLUMNS, BOARD_ROWS, PATTERN_CELLS, PATTERN_HEIGHT, PATTERN_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    Top,
    Bottom,
}

impl Half {
    /// First board row covered by this half.
    pub fn first_row(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Bottom => BOARD_ROWS - PATTERN_HEIGHT,
        }
    }
}

/// A fixed 2x3 coordinate template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternPosition {
    /// One-based sequence number in board order.
    pub number: usize,
    /// Absolute (left, right) column indices.
    pub columns: (usize, usize),
    pub half: Half,
    /// `(col, row)` pairs: left column top to bottom, then right column.
    pub coordinates: [(usize, usize); PATTERN_CELLS],
}

impl PatternPosition {
    fn new(number: usize, left: usize, half: Half) -> Self {
        let first_row = half.first_row();
        let mut coordinates = [(0, 0); PATTERN_CELLS];
        for (i, slot) in coordinates.iter_mut().enumerate() {
            let col = left + i / PATTERN_HEIGHT;
            let row = first_row + i % PATTERN_HEIGHT;
            *slot = (col, row);
        }
        Self {
            number,
            columns: (left, left + PATTERN_WIDTH - 1),
            half,
            coordinates,
        }
    }
}

/// Every pattern position on the board, numbered 1..=28.
pub fn pattern_positions() -> Vec<PatternPosition> {
    (0..BOARD_COLUMNS - PATTERN_WIDTH + 1)
        .flat_map(|left| [(left, Half::Top), (left, Half::Bottom)])
        .enumerate()
        .map(|(i, (left, half))| PatternPosition::new(i + 1, left, half))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_count_and_numbering() {
        let positions = pattern_positions();
        assert_eq!(positions.len(), 28);
        for (i, p) in positions.iter().enumerate() {
            assert_eq!(p.number, i + 1);
        }
    }

    #[test]
    fn test_first_pair_layout() {
        let positions = pattern_positions();
        assert_eq!(
            positions[0].coordinates,
            [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
        assert_eq!(positions[1].half, Half::Bottom);
        assert_eq!(
            positions[1].coordinates,
            [(0, 3), (0, 4), (0, 5), (1, 3), (1, 4), (1, 5)]
        );
        assert_eq!(positions[2].columns, (1, 2));
        assert_eq!(positions[27].columns, (13, 14));
    }

    #[test]
    fn test_templates_span_the_full_board_width() {
        let positions = pattern_positions();
        assert_eq!(positions.len(), (BOARD_COLUMNS - PATTERN_WIDTH + 1) * 2);
        let last = positions.last().unwrap();
        assert_eq!(last.columns.1, BOARD_COLUMNS - 1);
        assert!(positions
            .iter()
            .flat_map(|p| p.coordinates)
            .all(|(col, row)| col < BOARD_COLUMNS && row < BOARD_ROWS));
    }
}
