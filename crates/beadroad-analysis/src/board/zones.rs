//! Overlapping zone decomposition.

use serde::Serialize;

use beadroad_core::constants::BOARD_COLUMNS;
use beadroad_core::types::grid::Column;
use beadroad_core::types::{Grid, Outcome};

/// A contiguous run of whole columns cut from a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Zone {
    start: usize,
    columns: Vec<Column>,
}

impl Zone {
    /// First column index (absolute, 0-based).
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last column index (absolute, 0-based, inclusive).
    pub fn end(&self) -> usize {
        self.start + self.columns.len() - 1
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Read a cell by absolute board column. `None` outside the zone.
    pub fn get(&self, col: usize, row: usize) -> Option<Outcome> {
        let relative = col.checked_sub(self.start)?;
        self.columns.get(relative)?.get(row).copied()
    }

    /// Whether both absolute columns fall inside the zone.
    pub fn spans(&self, first: usize, last: usize) -> bool {
        first >= self.start && last <= self.end()
    }

    /// One-based inclusive label, e.g. `"1-3"`.
    pub fn range_label(&self) -> String {
        format!("{}-{}", self.start + 1, self.end() + 1)
    }

    fn has_outcomes(&self) -> bool {
        self.columns
            .iter()
            .flat_map(|column| column.iter())
            .any(|o| !o.is_empty())
    }
}

/// Slide a `width`-column window across the board, one column at a time.
///
/// Windows holding no outcome are dropped. Output is ordered by start
/// column; consecutive zones overlap by `width - 1` columns. A width of 0 or
/// wider than the board yields no zones.
pub fn decompose(grid: &Grid, width: usize) -> Vec<Zone> {
    if width == 0 || width > BOARD_COLUMNS {
        tracing::warn!(width, "zone width outside the board, no zones produced");
        return Vec::new();
    }

    let zones: Vec<Zone> = (0..=BOARD_COLUMNS - width)
        .map(|start| Zone {
            start,
            columns: grid.columns()[start..start + width].to_vec(),
        })
        .filter(Zone::has_outcomes)
        .collect();

    tracing::debug!(width, zones = zones.len(), "decomposed board into zones");
    zones
}
