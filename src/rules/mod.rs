//! Game rules: move validation, the rejection taxonomy, and win detection.

pub mod engine;
pub mod error;
pub mod win;

pub use engine::{apply_move, valid_targets};
pub use error::RuleViolation;
pub use win::{detect_winner, lines, Verdict};
