//! Ranked classical outcomes.

use serde::{Deserialize, Serialize};

use crate::board::classical::ClassicalBoard;
use crate::rules::win::Verdict;

/// One fully resolved board with its joint probability and verdict.
///
/// Outcomes are ephemeral: computed on demand from a session snapshot and
/// never persisted as part of session state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// The resolved board.
    pub board: ClassicalBoard,
    /// Joint probability of this resolution under the session's
    /// distribution, treating cells as independent.
    pub probability: f64,
    /// Verdict for the resolved board.
    pub verdict: Verdict,
}
