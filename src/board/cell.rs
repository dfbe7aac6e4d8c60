//! Per-cell probability distributions.
//!
//! A cell is not binary-occupied: it holds a three-way distribution over
//! "still empty", "marked by A", and "marked by B". The three slots are
//! non-negative and sum to one within [`EPSILON`] after every accepted move.
//!
//! Mass moves in one direction only: from the empty slot into a mark slot.
//! Each transfer clamps to `[0, 1]` to absorb floating-point drift, and the
//! residual drift is squeezed out once, at measurement time, by
//! [`CellDist::resolve`] — never mid-game, so the probabilities callers
//! display stay consistent with what the engine computes on.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::classical::CellState;
use crate::core::player::Player;

/// Tolerance for probability comparisons throughout the engine.
///
/// Distributions are considered normalized when their mass is within this
/// distance of one; a cell is considered committed when its empty slot is
/// within this distance of zero.
pub const EPSILON: f64 = 1e-3;

/// A cell's `(empty, A, B)` probability triple.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellDist {
    /// Probability the cell resolves to no mark.
    pub empty: f64,
    /// Probability the cell resolves to player A's mark.
    pub a: f64,
    /// Probability the cell resolves to player B's mark.
    pub b: f64,
}

impl CellDist {
    /// A fresh, fully uncommitted cell: `(1, 0, 0)`.
    pub const BLANK: CellDist = CellDist { empty: 1.0, a: 0.0, b: 0.0 };

    /// A cell fully resolved to the given state.
    #[must_use]
    pub fn certain(state: CellState) -> Self {
        match state {
            CellState::Empty => Self::BLANK,
            CellState::Mark(Player::A) => Self { empty: 0.0, a: 1.0, b: 0.0 },
            CellState::Mark(Player::B) => Self { empty: 0.0, a: 0.0, b: 1.0 },
        }
    }

    /// Probability mass on one resolved state.
    #[must_use]
    pub fn probability(&self, state: CellState) -> f64 {
        match state {
            CellState::Empty => self.empty,
            CellState::Mark(Player::A) => self.a,
            CellState::Mark(Player::B) => self.b,
        }
    }

    /// Total mass across the three slots.
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.empty + self.a + self.b
    }

    /// Whether the triple is a valid distribution: non-negative slots with
    /// mass within [`EPSILON`] of one. Violations are engine defects, not
    /// user errors.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.empty >= 0.0
            && self.a >= 0.0
            && self.b >= 0.0
            && (self.mass() - 1.0).abs() <= EPSILON
    }

    /// Whether the cell can still receive mass (empty slot above [`EPSILON`]).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.empty > EPSILON
    }

    /// Whether the cell is entirely uncommitted (empty slot within
    /// [`EPSILON`] of one), the precondition for a classical move.
    #[must_use]
    pub fn is_fully_empty(&self) -> bool {
        self.empty >= 1.0 - EPSILON
    }

    /// Whether the cell holds no meaningful empty mass (within [`EPSILON`]
    /// of zero).
    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.empty <= EPSILON
    }

    /// The cell after a classical move: all mass on the player's mark.
    #[must_use]
    pub fn committed_to(&self, player: Player) -> Self {
        Self::certain(CellState::Mark(player))
    }

    /// The cell after a split share: `amount` moves from the empty slot to
    /// the player's mark slot, both ends clamped to `[0, 1]`.
    #[must_use]
    pub fn with_share(&self, player: Player, amount: f64) -> Self {
        let empty = (self.empty - amount).clamp(0.0, 1.0);
        let (a, b) = match player {
            Player::A => ((self.a + amount).clamp(0.0, 1.0), self.b),
            Player::B => (self.a, (self.b + amount).clamp(0.0, 1.0)),
        };
        Self { empty, a, b }
    }

    /// Resolve the cell against one uniform draw `r ∈ [0, 1)`.
    ///
    /// Committed cells first renormalize the `(A, B)` pair to sum to exactly
    /// one, so residual floating-point mass in the empty slot cannot bias the
    /// outcome toward "empty". The comparison order — A, then B, then empty —
    /// is a fixed tie-break that seeded fixtures rely on.
    #[must_use]
    pub fn resolve(&self, r: f64) -> CellState {
        let (pa, pb) = if self.is_committed() {
            let marks = self.a + self.b;
            if marks > 0.0 {
                (self.a / marks, self.b / marks)
            } else {
                (self.a, self.b)
            }
        } else {
            (self.a, self.b)
        };

        if r < pa {
            CellState::Mark(Player::A)
        } else if r < pa + pb {
            CellState::Mark(Player::B)
        } else {
            CellState::Empty
        }
    }

    /// Candidate resolved states, most probable first.
    ///
    /// States at or below `drop_threshold` are omitted. Ties keep the fixed
    /// A, B, empty order, matching the [`CellDist::resolve`] comparison
    /// order. If every state sits at or below the threshold (floating
    /// underflow), the single most probable state is forced with probability
    /// one so downstream enumeration always has at least one branch.
    #[must_use]
    pub fn ranked_states(&self, drop_threshold: f64) -> SmallVec<[(CellState, f64); 3]> {
        let mut states: SmallVec<[(CellState, f64); 3]> = SmallVec::from_slice(&[
            (CellState::Mark(Player::A), self.a),
            (CellState::Mark(Player::B), self.b),
            (CellState::Empty, self.empty),
        ]);
        // Stable sort: equal probabilities keep the A, B, empty order.
        states.sort_by(|(_, p), (_, q)| q.partial_cmp(p).unwrap_or(std::cmp::Ordering::Equal));

        let kept: SmallVec<[(CellState, f64); 3]> = states
            .iter()
            .copied()
            .filter(|(_, p)| *p > drop_threshold)
            .collect();

        if kept.is_empty() {
            let (state, _) = states[0];
            return SmallVec::from_slice(&[(state, 1.0)]);
        }
        kept
    }
}

impl Default for CellDist {
    fn default() -> Self {
        Self::BLANK
    }
}
