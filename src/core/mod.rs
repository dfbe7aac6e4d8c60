//! Core engine types: players, moves, sessions, RNG.

pub mod moves;
pub mod player;
pub mod rng;
pub mod session;

pub use moves::{Move, MoveKind, MoveRecord, SplitShare};
pub use player::Player;
pub use rng::{GameRng, GameRngState};
pub use session::{GameSession, Phase};
