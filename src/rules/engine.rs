//! Move validation and application.
//!
//! [`apply_move`] is the single serialization point for game state changes:
//! no other component mutates a board. It is a pure function from a session
//! and a move to a new session; on rejection the input is untouched because
//! all work happens on a copy that is only returned on success.

use rustc_hash::FxHashSet;
use tracing::{debug, instrument};

use crate::board::cell::EPSILON;
use crate::board::grid::Board;
use crate::core::moves::{Move, MoveKind, MoveRecord, SplitShare};
use crate::core::session::{GameSession, Phase};

use super::error::RuleViolation;

/// Cells that can still receive probability mass, as
/// `(index, empty_probability)` pairs in ascending index order.
///
/// This is the move-generation seed for any strategy: classical moves need a
/// fully empty target, split moves draw capacity from these cells.
#[must_use]
pub fn valid_targets(session: &GameSession) -> Vec<(usize, f64)> {
    session.board.open_cells().collect()
}

/// Validate and apply a move, returning the successor session.
///
/// ## Preconditions
///
/// - Session phase is `Playing`, else [`RuleViolation::WrongPhase`].
/// - The move's player holds the turn, else [`RuleViolation::OutOfTurn`].
/// - Classical: target in range and entirely empty.
/// - Split: in-range distinct targets, two or more of them, non-negative
///   amounts summing to one within tolerance, each within its cell's
///   remaining empty mass.
///
/// ## Effects on success
///
/// The returned session has the updated board, the turn flipped, the move
/// count incremented, the move appended to history, and the phase advanced
/// to `ReadyToCollapse` once every required move has been played.
#[instrument(level = "debug", skip(session), fields(phase = %session.phase))]
pub fn apply_move(session: &GameSession, mv: &Move) -> Result<GameSession, RuleViolation> {
    if session.phase != Phase::Playing {
        return Err(RuleViolation::WrongPhase {
            required: Phase::Playing,
            actual: session.phase,
        });
    }
    if mv.player != session.current_player {
        return Err(RuleViolation::OutOfTurn { player: mv.player });
    }

    let board = match &mv.kind {
        MoveKind::Classical { cell } => apply_classical(&session.board, mv, *cell)?,
        MoveKind::Split { shares } => apply_split(&session.board, mv, shares)?,
    };

    let moves_played = session.moves_played + 1;
    let phase = if moves_played >= session.total_moves {
        Phase::ReadyToCollapse
    } else {
        Phase::Playing
    };

    let mut history = session.history.clone();
    history.push_back(MoveRecord::new(mv.player, mv.clone(), session.moves_played));

    debug!(player = %mv.player, moves_played, next_phase = %phase, "move accepted");

    Ok(GameSession {
        board,
        current_player: session.current_player.opponent(),
        moves_played,
        total_moves: session.total_moves,
        phase,
        history,
        collapsed_board: None,
        verdict: None,
    })
}

fn apply_classical(board: &Board, mv: &Move, cell: usize) -> Result<Board, RuleViolation> {
    let dist = board.cell(cell).ok_or(RuleViolation::IndexOutOfRange {
        index: cell,
        len: board.len(),
    })?;

    if !dist.is_fully_empty() {
        return Err(RuleViolation::CellNotFullyEmpty {
            index: cell,
            empty: dist.empty,
        });
    }

    Ok(board.with_cell(cell, dist.committed_to(mv.player)))
}

fn apply_split(board: &Board, mv: &Move, shares: &[SplitShare]) -> Result<Board, RuleViolation> {
    let mut seen = FxHashSet::default();
    for share in shares {
        if share.cell >= board.len() {
            return Err(RuleViolation::IndexOutOfRange {
                index: share.cell,
                len: board.len(),
            });
        }
        if !seen.insert(share.cell) {
            return Err(RuleViolation::DuplicateTarget { index: share.cell });
        }
    }

    let sum: f64 = shares.iter().map(|s| s.amount).sum();
    if shares.len() < 2 || shares.iter().any(|s| s.amount < 0.0) || (sum - 1.0).abs() > EPSILON {
        return Err(RuleViolation::SplitSumInvalid { sum });
    }

    for share in shares {
        // Index already validated above.
        let dist = board.cell(share.cell).copied().unwrap_or_default();
        if share.amount > dist.empty + EPSILON {
            return Err(RuleViolation::SplitExceedsCapacity {
                index: share.cell,
                amount: share.amount,
                empty: dist.empty,
            });
        }
    }

    let mut next = board.clone();
    for share in shares {
        if let Some(dist) = next.cell(share.cell).copied() {
            next = next.with_cell(share.cell, dist.with_share(mv.player, share.amount));
        }
    }
    Ok(next)
}
