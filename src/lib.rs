//! # quantum-grid
//!
//! A probabilistic board-game engine: each cell holds a three-way
//! probability distribution over "empty", "player A", and "player B" instead
//! of a binary mark. Players commit or split probability mass across cells;
//! once the board is fully committed, a single stochastic measurement
//! collapses every cell to a classical value and line-based win conditions
//! score the result.
//!
//! ## Design Principles
//!
//! 1. **Sessions Are Values**: Every operation takes a session snapshot and
//!    returns a new one. Persistent data structures (`im`) make those copies
//!    O(1), so forecast and validation callers can share snapshots freely.
//!
//! 2. **Deterministic Randomness**: The only stochastic operation — the
//!    one-shot collapse — draws from a seedable, forkable, serializable RNG.
//!    Same seed, same game.
//!
//! 3. **Typed Rejections**: Every illegal move maps to one
//!    [`RuleViolation`] kind, with the input session left untouched.
//!
//! ## Architecture
//!
//! - **Ranked Forecasting**: The top-K most probable classical boards are
//!   enumerated best-first over a lattice of per-cell choice ranks — at most
//!   O(K * cells) expansions instead of the 3^cells outcome space.
//!
//! - **Strategy Seam**: Opponents consume only the public surface
//!   (`valid_targets`, `apply_move`, `top_outcomes`) behind the
//!   [`Strategy`] trait.
//!
//! ## Modules
//!
//! - `core`: Players, moves, sessions, RNG
//! - `board`: Cell distributions, the distributional grid, resolved boards
//! - `rules`: Move validation, the rejection taxonomy, win detection
//! - `measure`: The one-shot collapse
//! - `forecast`: Top-K outcome ranking
//! - `strategy`: Pluggable move generation

pub mod board;
pub mod core;
pub mod forecast;
pub mod measure;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState,
    GameSession, Phase,
    Move, MoveKind, MoveRecord, SplitShare,
    Player,
};

pub use crate::board::{Board, CellDist, CellState, ClassicalBoard, EPSILON};

pub use crate::rules::{apply_move, detect_winner, lines, valid_targets, RuleViolation, Verdict};

pub use crate::measure::collapse;

pub use crate::forecast::{
    outcome_space, top_outcomes, top_outcomes_with, ForecastConfig, Outcome,
};

pub use crate::strategy::{RandomStrategy, Strategy};
