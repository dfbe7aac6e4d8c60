//! Uniform-random reference strategy.
//!
//! Plays legal moves with no lookahead: classical commits on random fully
//! empty cells, with occasional capacity-aware splits. Useful as a rollout
//! baseline and for exercising the engine in tests and self-play.

use crate::board::cell::EPSILON;
use crate::core::moves::Move;
use crate::core::rng::GameRng;
use crate::core::session::GameSession;
use crate::rules::engine::valid_targets;

use super::Strategy;

/// Strategy that plays random legal moves.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    /// Chance of attempting a split when a classical move is also available.
    /// Splits are forced when no cell is fully empty.
    pub split_chance: f64,
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self { split_chance: 0.3 }
    }
}

impl RandomStrategy {
    /// Create a strategy with a custom split chance.
    #[must_use]
    pub fn new(split_chance: f64) -> Self {
        Self { split_chance }
    }

    /// Spread the unit stake over shuffled open cells.
    ///
    /// While moves are still accepted the board's open capacity always
    /// covers the stake, so the walk terminates with the amounts summing to
    /// one; holding half back from a fully empty first pick keeps the split
    /// spanning at least two cells.
    fn build_split(&self, open: &[(usize, f64)], rng: &mut GameRng) -> Vec<(usize, f64)> {
        let mut order: Vec<(usize, f64)> = open.to_vec();
        rng.shuffle(&mut order);

        let mut shares: Vec<(usize, f64)> = Vec::with_capacity(2);
        let mut remaining = 1.0_f64;
        let mut held_back = false;
        for (i, &(cell, capacity)) in order.iter().enumerate() {
            let last = i == order.len() - 1;
            let mut take = capacity.min(remaining);
            if shares.is_empty() && !last && take >= remaining {
                take = remaining / 2.0;
                held_back = true;
            }
            if take > 0.0 {
                shares.push((cell, take));
                remaining -= take;
            }
            if remaining <= 1e-9 {
                break;
            }
        }
        if remaining > 1e-9 && held_back {
            // Leftover only exists when the first pick was held back, and
            // that cell had capacity for the whole stake.
            shares[0].1 += remaining;
        }
        shares
    }
}

impl Strategy for RandomStrategy {
    fn propose(&self, session: &GameSession, rng: &mut GameRng) -> Option<Move> {
        if !session.is_playing() {
            return None;
        }
        let open = valid_targets(session);
        if open.is_empty() {
            return None;
        }

        let fully_empty: Vec<usize> = open
            .iter()
            .filter(|(_, p)| *p >= 1.0 - EPSILON)
            .map(|(i, _)| *i)
            .collect();

        let can_classical = !fully_empty.is_empty();
        let can_split = open.len() >= 2;

        if can_split && (!can_classical || rng.gen_bool(self.split_chance)) {
            let shares = self.build_split(&open, rng);
            if shares.len() >= 2 {
                return Some(Move::split(session.current_player, &shares));
            }
        }
        let cell = rng.choose(&fully_empty).copied()?;
        Some(Move::classical(session.current_player, cell))
    }
}
