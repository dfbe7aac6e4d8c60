//! Pluggable move-generation strategies.
//!
//! Strategies are the seam where opponent logic plugs in. They consume only
//! the public engine surface — open-cell targets, move application, outcome
//! forecasts — and never reach into board internals, so heuristic or learned
//! opponents stay decoupled from the engine.

pub mod random;

use crate::core::moves::Move;
use crate::core::rng::GameRng;
use crate::core::session::GameSession;

pub use random::RandomStrategy;

/// Policy for proposing the next move for the player on turn.
pub trait Strategy: Send + Sync {
    /// Propose a move for the session's current player.
    ///
    /// Returns `None` when the session accepts no further moves. A proposed
    /// move is expected to pass validation against the same snapshot.
    fn propose(&self, session: &GameSession, rng: &mut GameRng) -> Option<Move>;
}
