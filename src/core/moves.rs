//! Move representation: classical commits and probability splits.
//!
//! A move carries the acting player plus its kind:
//! - *Classical*: fully commit one entirely-empty cell to the player's mark.
//! - *Split*: distribute one unit of commitment probability across two or
//!   more distinct cells in a single turn.
//!
//! Moves are plain data, validated by the rules engine, and recorded in the
//! session history for replay and training.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Player;

/// One allocation inside a split move.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitShare {
    /// Target cell index.
    pub cell: usize,
    /// Probability mass allocated to the target.
    pub amount: f64,
}

/// What a move does, independent of who plays it.
///
/// SmallVec keeps the common 2-4 split targets inline without heap
/// allocation. The serde representation stays externally tagged so bincode
/// snapshots round-trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MoveKind {
    /// Fully commit one cell.
    Classical {
        /// Target cell index.
        cell: usize,
    },
    /// Spread one unit of mass over several cells.
    Split {
        /// Per-cell allocations.
        shares: SmallVec<[SplitShare; 4]>,
    },
}

/// A complete move: acting player plus effect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// What the move does.
    pub kind: MoveKind,
}

impl Move {
    /// A classical move on one cell.
    #[must_use]
    pub fn classical(player: Player, cell: usize) -> Self {
        Self {
            player,
            kind: MoveKind::Classical { cell },
        }
    }

    /// A split move from `(cell, amount)` pairs.
    #[must_use]
    pub fn split(player: Player, shares: &[(usize, f64)]) -> Self {
        Self {
            player,
            kind: MoveKind::Split {
                shares: shares
                    .iter()
                    .map(|&(cell, amount)| SplitShare { cell, amount })
                    .collect(),
            },
        }
    }

    /// Target cell indices in declaration order.
    #[must_use]
    pub fn targets(&self) -> SmallVec<[usize; 4]> {
        match &self.kind {
            MoveKind::Classical { cell } => SmallVec::from_slice(&[*cell]),
            MoveKind::Split { shares } => shares.iter().map(|s| s.cell).collect(),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            MoveKind::Classical { cell } => write!(f, "{} -> {}", self.player, cell),
            MoveKind::Split { shares } => {
                write!(f, "{} -> [", self.player)?;
                for (i, share) in shares.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}:{:.3}", share.cell, share.amount)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// A recorded move with ordering metadata for history tracking.
///
/// Used for replay, debugging, and training data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who took this move.
    pub player: Player,
    /// The move taken.
    pub mv: Move,
    /// Zero-based position in the game's move sequence.
    pub sequence: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: Player, mv: Move, sequence: u32) -> Self {
        Self { player, mv, sequence }
    }
}
