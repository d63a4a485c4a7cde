//! The fixed 15x6 bead-road outcome matrix.
//!
//! Cells are stored column-major, matching the play order of a bead road
//! (top to bottom, then the next column). Out-of-range coordinates are never
//! stored: writes are dropped and reads yield [`Outcome::Empty`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Outcome;
use crate::constants::{BOARD_COLUMNS, BOARD_ROWS};

/// One board column, top row first.
pub type Column = [Outcome; BOARD_ROWS];

/// A 15x6 grid of outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: [Column; BOARD_COLUMNS],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// A grid with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: [[Outcome::Empty; BOARD_ROWS]; BOARD_COLUMNS],
        }
    }

    /// Build a grid from column strings, top row first (`"BPT"`, `"P.B"`).
    ///
    /// Columns past the 15th and symbols past the 6th row are dropped, as are
    /// unrecognised symbols.
    pub fn from_columns<S: AsRef<str>>(columns: &[S]) -> Self {
        let mut grid = Self::new();
        for (col, column) in columns.iter().enumerate() {
            for (row, symbol) in column.as_ref().chars().enumerate() {
                if let Some(outcome) = Outcome::from_symbol(symbol) {
                    grid.set(col, row, outcome);
                }
            }
        }
        grid
    }

    /// Read a cell. Out-of-range coordinates read as empty.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> Outcome {
        self.cells
            .get(col)
            .and_then(|column| column.get(row))
            .copied()
            .unwrap_or_default()
    }

    /// Write a cell. Out-of-range writes are dropped; returns whether the
    /// value was stored.
    pub fn set(&mut self, col: usize, row: usize, value: Outcome) -> bool {
        match self.cells.get_mut(col).and_then(|column| column.get_mut(row)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => {
                ::tracing::debug!(col, row, "dropping out-of-range cell write");
                false
            }
        }
    }

    /// A whole column, or `None` past the right edge.
    pub fn column(&self, col: usize) -> Option<&Column> {
        self.cells.get(col)
    }

    pub fn columns(&self) -> &[Column; BOARD_COLUMNS] {
        &self.cells
    }

    /// Iterate `(col, row, outcome)` in column-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Outcome)> + '_ {
        self.cells.iter().enumerate().flat_map(|(col, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(row, outcome)| (col, row, *outcome))
        })
    }

    /// True when no cell holds an outcome.
    pub fn is_blank(&self) -> bool {
        self.cells().all(|(_, _, o)| o.is_empty())
    }

    /// Number of cells holding `outcome`.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.cells().filter(|(_, _, o)| *o == outcome).count()
    }
}

/// Renders rows top to bottom, `.` for empty cells.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLUMNS {
                let symbol = self.get(col, row).symbol().unwrap_or('.');
                write!(f, "{symbol}")?;
            }
            if row + 1 < BOARD_ROWS {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
