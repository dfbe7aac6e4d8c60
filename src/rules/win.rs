//! Win detection over resolved boards.
//!
//! Scans every straight line of length `side` — each row, each column, and
//! both diagonals (`2 * side + 2` lines in total). A line counts for a mark
//! only when every cell in it carries exactly that mark; any empty cell
//! disqualifies the line for both players.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::instrument;

use crate::board::classical::{CellState, ClassicalBoard};
use crate::core::player::Player;

/// Result of evaluating a resolved board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Exactly one player completed a line.
    Winner(Player),
    /// No player completed a line, or both did.
    Draw,
}

impl Verdict {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, Verdict::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Winner(player) => write!(f, "{player} wins"),
            Verdict::Draw => write!(f, "draw"),
        }
    }
}

/// All straight lines of length `side`, as cell index groups:
/// rows, then columns, then the main and anti diagonals.
#[must_use]
pub fn lines(side: usize) -> Vec<SmallVec<[usize; 4]>> {
    let mut lines = Vec::with_capacity(2 * side + 2);

    for row in 0..side {
        lines.push((0..side).map(|col| row * side + col).collect());
    }
    for col in 0..side {
        lines.push((0..side).map(|row| row * side + col).collect());
    }
    lines.push((0..side).map(|i| i * side + i).collect());
    lines.push((0..side).map(|i| i * side + (side - 1 - i)).collect());

    lines
}

/// Determine the verdict for a resolved board.
///
/// One or more complete lines for exactly one mark wins. Complete lines for
/// both marks, or for neither, are both a [`Verdict::Draw`]: "no contest"
/// and "mutual block" are deliberately not distinguished. Rule sets that
/// want an asymmetric tie-break for the mutual case need a different
/// evaluator.
#[instrument(level = "debug", skip(board), fields(side = board.side()))]
#[must_use]
pub fn detect_winner(board: &ClassicalBoard) -> Verdict {
    let mut a_complete = false;
    let mut b_complete = false;

    for line in lines(board.side()) {
        let first = match board.get(line[0]) {
            Some(CellState::Mark(player)) => player,
            _ => continue,
        };
        if line
            .iter()
            .all(|&i| board.get(i) == Some(CellState::Mark(first)))
        {
            match first {
                Player::A => a_complete = true,
                Player::B => b_complete = true,
            }
        }
    }

    match (a_complete, b_complete) {
        (true, false) => Verdict::Winner(Player::A),
        (false, true) => Verdict::Winner(Player::B),
        _ => Verdict::Draw,
    }
}
