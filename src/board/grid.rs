//! The distributional board.
//!
//! Backed by an `im` persistent vector: cloning a board is O(1) and every
//! mutation produces a new board value with structural sharing. Forecast
//! callers and concurrent readers hold stable snapshots for free, exactly
//! like the engine's search consumers expect.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::CellDist;

/// Supported side lengths.
pub const MIN_SIDE: usize = 2;
/// Supported side lengths.
pub const MAX_SIDE: usize = 4;

/// An ordered, fixed-length grid of cell distributions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    side: usize,
    cells: Vector<CellDist>,
}

impl Board {
    /// Create a fresh board with every cell fully uncommitted.
    ///
    /// `side` must be within `MIN_SIDE..=MAX_SIDE`.
    #[must_use]
    pub fn new(side: usize) -> Self {
        assert!(
            (MIN_SIDE..=MAX_SIDE).contains(&side),
            "Side length must be {MIN_SIDE}-{MAX_SIDE}"
        );
        Self {
            side,
            cells: std::iter::repeat(CellDist::BLANK).take(side * side).collect(),
        }
    }

    /// Side length.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of cells (`side * side`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the board has no cells. Never true for a constructed board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The distribution at a cell index.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&CellDist> {
        self.cells.get(index)
    }

    /// A new board with one cell replaced. The receiver is untouched.
    #[must_use]
    pub fn with_cell(&self, index: usize, cell: CellDist) -> Self {
        Self {
            side: self.side,
            cells: self.cells.update(index, cell),
        }
    }

    /// Iterate over all cell distributions in index order.
    pub fn iter(&self) -> impl Iterator<Item = &CellDist> {
        self.cells.iter()
    }

    /// Cells that can still receive mass, as `(index, empty_probability)`
    /// pairs in ascending index order.
    pub fn open_cells(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_open())
            .map(|(i, c)| (i, c.empty))
    }

    /// Whether every cell's empty mass is exhausted.
    #[must_use]
    pub fn all_committed(&self) -> bool {
        self.cells.iter().all(CellDist::is_committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::Player;

    #[test]
    fn test_new_board_is_blank() {
        let board = Board::new(3);
        assert_eq!(board.side(), 3);
        assert_eq!(board.len(), 9);
        assert!(board.iter().all(|c| *c == CellDist::BLANK));
        assert!(!board.all_committed());
    }

    #[test]
    #[should_panic(expected = "Side length must be 2-4")]
    fn test_side_too_small_panics() {
        let _ = Board::new(1);
    }

    #[test]
    #[should_panic(expected = "Side length must be 2-4")]
    fn test_side_too_large_panics() {
        let _ = Board::new(5);
    }

    #[test]
    fn test_with_cell_leaves_original_untouched() {
        let board = Board::new(2);
        let committed = board.with_cell(0, CellDist::BLANK.committed_to(Player::A));

        assert_eq!(board.cell(0), Some(&CellDist::BLANK));
        assert_eq!(committed.cell(0).unwrap().a, 1.0);
        assert_eq!(committed.cell(1), Some(&CellDist::BLANK));
    }

    #[test]
    fn test_open_cells_skips_committed() {
        let board = Board::new(2)
            .with_cell(0, CellDist::BLANK.committed_to(Player::A))
            .with_cell(2, CellDist::BLANK.with_share(Player::B, 0.25));

        let open: Vec<_> = board.open_cells().collect();
        assert_eq!(open.len(), 3);
        assert_eq!(open[0].0, 1);
        assert!((open[1].1 - 0.75).abs() < 1e-12);
        assert_eq!(open[2].0, 3);
    }

    #[test]
    fn test_all_committed() {
        let mut board = Board::new(2);
        for i in 0..4 {
            board = board.with_cell(i, CellDist::BLANK.committed_to(Player::A));
        }
        assert!(board.all_committed());
    }

    #[test]
    fn test_serde_round_trip() {
        let board = Board::new(2).with_cell(1, CellDist::BLANK.with_share(Player::B, 0.5));
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
