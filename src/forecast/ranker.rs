//! Best-first enumeration of the most probable resolved boards.
//!
//! A board with up to 16 cells and up to 3 resolved states per cell spans up
//! to 3^16 (~43M) classical outcomes. Forecasting never needs them all: it
//! needs the K most probable, in order. This module walks a lattice of
//! per-cell choice ranks with a max-heap frontier, expanding at most
//! O(K * cells) combinations.
//!
//! ## How it works
//!
//! Each cell contributes a list of candidate states sorted by probability
//! descending. A combination is a vector of per-cell ranks into those lists;
//! rank vector `[0, 0, ..., 0]` is the single most probable board. Popping a
//! combination emits it and pushes one successor per cell (that cell's rank
//! advanced by one). Advancing a rank multiplies the joint probability by a
//! factor of at most one, so no successor outranks its parent and the heap
//! pops in non-increasing probability order. Joint probabilities are
//! recomputed from their rank vector every time rather than derived from the
//! parent, so floating error never compounds along a path. Distinct paths
//! can reach the same combination, hence the seen-set keyed on the exact
//! rank vector.

use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;
use smallvec::{smallvec, SmallVec};
use tracing::{instrument, trace};

use crate::board::cell::CellDist;
use crate::board::classical::{CellState, ClassicalBoard};
use crate::core::session::GameSession;
use crate::rules::win::detect_winner;

use super::config::ForecastConfig;
use super::outcome::Outcome;

/// Per-cell candidate states, most probable first.
type CellOptions = SmallVec<[(CellState, f64); 3]>;

/// A combination of per-cell choice ranks. Inline for boards up to 16 cells.
type RankVec = SmallVec<[u8; 16]>;

/// An unexplored combination on the frontier.
#[derive(Clone, Debug, PartialEq)]
struct Candidate {
    probability: f64,
    ranks: RankVec,
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    /// Max-heap on probability; ties pop the lexicographically smallest
    /// rank vector first so a call's output order is stable.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.probability
            .partial_cmp(&other.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| other.ranks.cmp(&self.ranks))
    }
}

/// The `k` most probable resolved boards under the default config.
///
/// See [`top_outcomes_with`].
#[must_use]
pub fn top_outcomes(session: &GameSession, k: usize) -> Vec<Outcome> {
    top_outcomes_with(session, k, &ForecastConfig::default())
}

/// The `k` most probable resolved boards, descending by joint probability.
///
/// Works on any session snapshot, mid-game or fully committed: cells are
/// treated as probabilistically independent and uncommitted cells simply
/// contribute an "empty" branch. Enumeration stops at `k` outcomes, an
/// exhausted frontier, or a candidate below `config.min_probability`,
/// whichever comes first. For fixed input probabilities the ranking is
/// deterministic call to call.
#[instrument(level = "debug", skip(session, config), fields(side = session.side()))]
#[must_use]
pub fn top_outcomes_with(session: &GameSession, k: usize, config: &ForecastConfig) -> Vec<Outcome> {
    if k == 0 {
        return Vec::new();
    }

    let options: Vec<CellOptions> = session
        .board
        .iter()
        .map(|cell| cell.ranked_states(config.drop_threshold))
        .collect();

    let root: RankVec = smallvec![0; options.len()];
    let mut frontier = BinaryHeap::new();
    frontier.push(Candidate {
        probability: joint_probability(&options, &root),
        ranks: root.clone(),
    });

    let mut seen: FxHashSet<RankVec> = FxHashSet::default();
    seen.insert(root);

    let mut outcomes = Vec::new();
    while outcomes.len() < k {
        let Some(candidate) = frontier.pop() else {
            break;
        };
        if candidate.probability < config.min_probability {
            break;
        }

        for cell in 0..options.len() {
            let advanced = candidate.ranks[cell] as usize + 1;
            if advanced < options[cell].len() {
                let mut ranks = candidate.ranks.clone();
                ranks[cell] = advanced as u8;
                if seen.insert(ranks.clone()) {
                    frontier.push(Candidate {
                        probability: joint_probability(&options, &ranks),
                        ranks,
                    });
                }
            }
        }

        trace!(rank = outcomes.len(), probability = candidate.probability, "outcome emitted");
        outcomes.push(realize(session.side(), &options, &candidate));
    }

    outcomes
}

/// Product of the chosen per-cell probabilities, computed from scratch.
fn joint_probability(options: &[CellOptions], ranks: &RankVec) -> f64 {
    options
        .iter()
        .zip(ranks.iter())
        .map(|(cell, &rank)| cell[rank as usize].1)
        .product()
}

/// Convert an emitted combination into a classical board with its verdict.
fn realize(side: usize, options: &[CellOptions], candidate: &Candidate) -> Outcome {
    let cells = options
        .iter()
        .zip(candidate.ranks.iter())
        .map(|(cell, &rank)| cell[rank as usize].0)
        .collect();
    let board = ClassicalBoard::new(side, cells);
    Outcome {
        verdict: detect_winner(&board),
        probability: candidate.probability,
        board,
    }
}

/// Number of distinct enumerable combinations for a session under a config.
///
/// The full outcome space for round-trip checks: requesting at least this
/// many outcomes with a zero probability floor enumerates everything.
#[must_use]
pub fn outcome_space(session: &GameSession, config: &ForecastConfig) -> usize {
    session
        .board
        .iter()
        .map(|cell: &CellDist| cell.ranked_states(config.drop_threshold).len())
        .product()
}
