//! Rule violation taxonomy.
//!
//! Every rejection is typed, locally recoverable, and leaves the input
//! session untouched. Callers (strategies, transport layers) translate these
//! into user-facing messages and retry with a corrected move; the engine
//! never retries internally.

use thiserror::Error;

use crate::core::player::Player;
use crate::core::session::Phase;

/// Why a move or measurement was rejected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RuleViolation {
    /// Operation attempted outside its required session phase.
    #[error("operation requires phase {required}, session is {actual}")]
    WrongPhase {
        /// Phase the operation needs.
        required: Phase,
        /// Phase the session is in.
        actual: Phase,
    },

    /// Move submitted by a player who does not hold the turn.
    #[error("player {player} moved out of turn")]
    OutOfTurn {
        /// The player who tried to move.
        player: Player,
    },

    /// Target cell index outside the board.
    #[error("cell index {index} out of range for a board of {len} cells")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of cells on the board.
        len: usize,
    },

    /// The same cell referenced more than once in a split.
    #[error("cell {index} targeted more than once in a split")]
    DuplicateTarget {
        /// The repeated index.
        index: usize,
    },

    /// Classical move on a cell that is not entirely empty.
    #[error("classical move needs a fully empty cell; cell {index} has empty probability {empty}")]
    CellNotFullyEmpty {
        /// Target cell.
        index: usize,
        /// Its remaining empty probability.
        empty: f64,
    },

    /// Split allocations are not a valid partition of the unit stake:
    /// fewer than two targets, a negative amount, or a total away from one.
    #[error("split allocations must spread the unit stake over at least two cells; total was {sum}")]
    SplitSumInvalid {
        /// Sum of the submitted amounts.
        sum: f64,
    },

    /// A split allocation larger than its cell's remaining empty mass.
    #[error("allocation {amount} exceeds remaining empty probability {empty} of cell {index}")]
    SplitExceedsCapacity {
        /// Target cell.
        index: usize,
        /// The submitted amount.
        amount: f64,
        /// The cell's remaining empty probability.
        empty: f64,
    },
}
