//! Tie resolution.
//!
//! Every tie cell is replaced by a banker/player value derived from cells
//! that are already resolved. Traversal is column-major, left to right, top
//! to bottom, so the left, upper-left and up neighbours of a cell are final
//! by the time it is visited.
//!
//! Substitution sources per position:
//! - column 0, row 0: the cell below it (look-ahead within the column)
//! - column 0, row y: the cell above it
//! - column x, row 0: the cell to its left
//! - otherwise: majority of (left, upper-left, up), ties in the vote going
//!   to the earliest neighbour in that order
//!
//! Only banker/player cells vote. When the sources hold no such value the
//! first decided cell further down the column is used, and a board with no
//! decided value to borrow resolves to banker.

use smallvec::{smallvec, SmallVec};

use beadroad_core::constants::{BOARD_COLUMNS, BOARD_ROWS};
use beadroad_core::types::{Grid, Outcome};

/// Substitute used when nothing on the board can be borrowed.
const FALLBACK: Outcome = Outcome::Banker;

/// Produce a new grid with every tie cell replaced. The input is untouched.
pub fn resolve_ties(original: &Grid) -> Grid {
    let mut resolved = original.clone();
    let mut substituted = 0usize;

    for col in 0..BOARD_COLUMNS {
        for row in 0..BOARD_ROWS {
            if resolved.get(col, row).is_tie() {
                let value = substitute(&resolved, col, row);
                resolved.set(col, row, value);
                substituted += 1;
            }
        }
    }

    tracing::debug!(substituted, "resolved tie cells");
    resolved
}

fn substitute(grid: &Grid, col: usize, row: usize) -> Outcome {
    let votes: SmallVec<[Outcome; 3]> = match (col, row) {
        (0, 0) => smallvec![grid.get(0, 1)],
        (0, _) => smallvec![grid.get(0, row - 1)],
        (_, 0) => smallvec![grid.get(col - 1, 0)],
        _ => smallvec![
            grid.get(col - 1, row),
            grid.get(col - 1, row - 1),
            grid.get(col, row - 1),
        ],
    };

    majority_vote(&votes)
        .or_else(|| first_decided_below(grid, col, row))
        .unwrap_or(FALLBACK)
}

/// The most frequent banker/player value among `votes`.
///
/// On equal counts the value seen first wins. Empty and tie votes are
/// ignored; `None` when no vote is decided. Empty neighbours are skipped
/// rather than counted so a resolved tie never comes out empty.
pub fn majority_vote(votes: &[Outcome]) -> Option<Outcome> {
    let mut best: Option<(Outcome, usize)> = None;
    for &candidate in votes.iter().filter(|o| o.is_decided()) {
        let count = votes.iter().filter(|&&o| o == candidate).count();
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((candidate, count));
        }
    }
    best.map(|(outcome, _)| outcome)
}

fn first_decided_below(grid: &Grid, col: usize, row: usize) -> Option<Outcome> {
    (row + 1..BOARD_ROWS)
        .map(|r| grid.get(col, r))
        .find(|o| o.is_decided())
}

#[cfg(test)]
mod tests {
    use super::*;
    use beadroad_core::types::Outcome::{Banker as B, Empty as E, Player as P, Tie as T};

    #[test]
    fn test_majority_two_of_three() {
        assert_eq!(majority_vote(&[B, P, P]), Some(P));
        assert_eq!(majority_vote(&[B, P, B]), Some(B));
    }

    #[test]
    fn test_majority_split_goes_to_left() {
        assert_eq!(majority_vote(&[B, E, P]), Some(B));
        assert_eq!(majority_vote(&[E, P, B]), Some(P));
    }

    #[test]
    fn test_empty_neighbours_never_outvote_a_decided_one() {
        assert_eq!(majority_vote(&[E, E, P]), Some(P));
        assert_eq!(majority_vote(&[T, E, B]), Some(B));
    }

    #[test]
    fn test_majority_ignores_undecided() {
        assert_eq!(majority_vote(&[E, T]), None);
        assert_eq!(majority_vote(&[]), None);
    }

    #[test]
    fn test_first_column_top_looks_ahead() {
        let grid = Grid::from_columns(&["TPB"]);
        let resolved = resolve_ties(&grid);
        assert_eq!(resolved.get(0, 0), P);
        assert_eq!(grid.get(0, 0), T);
    }

    #[test]
    fn test_first_column_copies_cell_above() {
        let grid = Grid::from_columns(&["BTT"]);
        let resolved = resolve_ties(&grid);
        assert_eq!(resolved.get(0, 1), B);
        assert_eq!(resolved.get(0, 2), B);
    }

    #[test]
    fn test_top_row_copies_left() {
        let grid = Grid::from_columns(&["PBBBBB", "TBB"]);
        let resolved = resolve_ties(&grid);
        assert_eq!(resolved.get(1, 0), P);
    }

    #[test]
    fn test_interior_majority() {
        // left = B, upper-left = P, up = P
        let grid = Grid::from_columns(&["BPB", "BPT"]);
        let resolved = resolve_ties(&grid);
        assert_eq!(resolved.get(1, 2), P);
    }

    #[test]
    fn test_interior_uses_resolved_neighbours() {
        // (1,1) resolves from left=P, upper-left=B, up=B -> B, then (1,2)
        // sees left=B, upper-left=P, up=B(resolved) -> B.
        let grid = Grid::from_columns(&["BPB", "BTT"]);
        let resolved = resolve_ties(&grid);
        assert_eq!(resolved.get(1, 1), B);
        assert_eq!(resolved.get(1, 2), B);
    }

    #[test]
    fn test_leading_tie_run_borrows_from_below() {
        let grid = Grid::from_columns(&["TTP"]);
        let resolved = resolve_ties(&grid);
        assert_eq!(resolved.get(0, 0), P);
        assert_eq!(resolved.get(0, 1), P);
    }

    #[test]
    fn test_all_tie_board_falls_back() {
        let grid = Grid::from_columns(&["TT"]);
        let resolved = resolve_ties(&grid);
        assert_eq!(resolved.get(0, 0), B);
        assert_eq!(resolved.get(0, 1), B);
        assert_eq!(resolved.count(T), 0);
    }
}
