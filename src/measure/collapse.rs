//! The one-shot measurement.
//!
//! Once every cell is committed, a single stochastic measurement resolves all
//! cells simultaneously to classical values. Each cell is measured
//! independently against one uniform draw; there is no cross-cell
//! correlation. The draw source is an explicit [`GameRng`] so fixtures can
//! seed it and replay an exact collapse.
//!
//! Measurement must run at most once per session. The `ReadyToCollapse` →
//! `Collapsed` phase guard is the enforcement mechanism — callers that share
//! a session id across threads coordinate through whatever store owns that
//! id, not through a lock in here.

use tracing::{debug, instrument};

use crate::board::classical::ClassicalBoard;
use crate::core::rng::GameRng;
use crate::core::session::{GameSession, Phase};
use crate::rules::error::RuleViolation;
use crate::rules::win::detect_winner;

/// Measure every cell and freeze the session.
///
/// Legal only in `ReadyToCollapse`, else [`RuleViolation::WrongPhase`].
/// Cells whose empty mass has decayed to within tolerance of zero
/// renormalize their mark pair before the draw, so floating-point residue
/// cannot leak into "empty" outcomes. The returned session is `Collapsed`
/// with the resolved board and verdict attached; the input is untouched.
#[instrument(level = "debug", skip_all, fields(side = session.side()))]
pub fn collapse(session: &GameSession, rng: &mut GameRng) -> Result<GameSession, RuleViolation> {
    if session.phase != Phase::ReadyToCollapse {
        return Err(RuleViolation::WrongPhase {
            required: Phase::ReadyToCollapse,
            actual: session.phase,
        });
    }

    let cells = session
        .board
        .iter()
        .map(|dist| dist.resolve(rng.unit()))
        .collect();
    let board = ClassicalBoard::new(session.side(), cells);
    let verdict = detect_winner(&board);

    debug!(%verdict, "session collapsed");

    Ok(GameSession {
        phase: Phase::Collapsed,
        collapsed_board: Some(board),
        verdict: Some(verdict),
        ..session.clone()
    })
}
