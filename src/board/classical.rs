//! Fully resolved boards.
//!
//! Measurement and forecasting both produce classical boards: every cell is
//! a definite mark or empty. The win evaluator only ever sees these.

use serde::{Deserialize, Serialize};

use crate::core::player::Player;

/// A cell's resolved state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// No mark.
    Empty,
    /// Marked by a player.
    Mark(Player),
}

impl std::fmt::Display for CellState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellState::Empty => write!(f, "."),
            CellState::Mark(player) => write!(f, "{player}"),
        }
    }
}

/// A fully resolved board in row-major order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassicalBoard {
    side: usize,
    cells: Vec<CellState>,
}

impl ClassicalBoard {
    /// Create a board from resolved cells.
    ///
    /// `cells.len()` must equal `side * side`.
    #[must_use]
    pub fn new(side: usize, cells: Vec<CellState>) -> Self {
        assert_eq!(cells.len(), side * side, "Cell count must equal side squared");
        Self { side, cells }
    }

    /// Side length.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the board has no cells. Never true for a constructed board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The state at a cell index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<CellState> {
        self.cells.get(index).copied()
    }

    /// All resolved cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }
}

impl std::fmt::Display for ClassicalBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.side) {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
