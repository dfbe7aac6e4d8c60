//! Game session state and lifecycle.
//!
//! A session is a value: the rules engine and measurement never mutate one in
//! place, they hand back a new session. Persistent data structures keep those
//! copies cheap, so external callers can hold a snapshot for forecasting while
//! the next move is validated against the same state.
//!
//! ## Lifecycle
//!
//! `Playing` → `ReadyToCollapse` → `Collapsed`. The first transition fires
//! exactly when the number of accepted moves reaches `side * side`
//! (equivalently, when every cell's empty mass is exhausted). `Collapsed` is
//! terminal: the resolved board and verdict are frozen onto the session and
//! no further operation is legal.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::moves::MoveRecord;
use super::player::Player;
use crate::board::classical::ClassicalBoard;
use crate::board::grid::Board;
use crate::rules::win::Verdict;

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Moves are being accepted.
    Playing,
    /// Every cell is committed; the one-shot measurement may run.
    ReadyToCollapse,
    /// Measured. Terminal.
    Collapsed,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Playing => write!(f, "playing"),
            Phase::ReadyToCollapse => write!(f, "ready_to_collapse"),
            Phase::Collapsed => write!(f, "collapsed"),
        }
    }
}

/// A full game session.
///
/// Owned exclusively by whatever store tracks session identity; the engine
/// only ever reads one and returns a successor value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    /// Current cell distributions.
    pub board: Board,

    /// Player who holds the turn. Meaningless once collapsed.
    pub current_player: Player,

    /// Accepted moves so far.
    pub moves_played: u32,

    /// Moves required to fully commit the board (`side * side`).
    pub total_moves: u32,

    /// Lifecycle phase.
    pub phase: Phase,

    /// Accepted moves in order.
    pub history: Vector<MoveRecord>,

    /// The measured board, present once collapsed.
    pub collapsed_board: Option<ClassicalBoard>,

    /// The final verdict, present once collapsed.
    pub verdict: Option<Verdict>,
}

impl GameSession {
    /// Create a fresh session: all cells at `(1, 0, 0)`, phase `Playing`.
    ///
    /// `side` must be 2-4 (enforced by [`Board::new`]).
    #[must_use]
    pub fn new(side: usize, first_player: Player) -> Self {
        let board = Board::new(side);
        let total_moves = board.len() as u32;
        Self {
            board,
            current_player: first_player,
            moves_played: 0,
            total_moves,
            phase: Phase::Playing,
            history: Vector::new(),
            collapsed_board: None,
            verdict: None,
        }
    }

    /// Side length of the board.
    #[must_use]
    pub fn side(&self) -> usize {
        self.board.side()
    }

    /// Whether moves are still being accepted.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Whether the one-shot measurement may run.
    #[must_use]
    pub fn is_ready_to_collapse(&self) -> bool {
        self.phase == Phase::ReadyToCollapse
    }

    /// Whether the session is terminal.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.phase == Phase::Collapsed
    }

    /// Serialize to a compact snapshot for an external session store.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Restore a session from a compact snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
