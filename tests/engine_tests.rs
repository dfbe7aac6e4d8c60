//! Move engine integration tests over the public API.

use quantum_grid::{
    apply_move, top_outcomes, valid_targets, GameSession, Move, Phase, Player, RuleViolation,
    Verdict, EPSILON,
};

// =============================================================================
// Session Creation
// =============================================================================

#[test]
fn test_fresh_session_is_fully_open() {
    let session = GameSession::new(3, Player::B);

    assert_eq!(session.phase, Phase::Playing);
    assert_eq!(session.current_player, Player::B);
    assert_eq!(session.total_moves, 9);

    let targets = valid_targets(&session);
    assert_eq!(targets.len(), 9);
    assert!(targets.iter().all(|(_, p)| *p == 1.0));
}

// =============================================================================
// Classical Playout (2x2 scenario)
// =============================================================================

#[test]
fn test_2x2_classical_playout_forecast_and_verdict() {
    let mut session = GameSession::new(2, Player::A);
    session = apply_move(&session, &Move::classical(Player::A, 0)).unwrap();
    session = apply_move(&session, &Move::classical(Player::B, 1)).unwrap();
    session = apply_move(&session, &Move::classical(Player::A, 2)).unwrap();
    session = apply_move(&session, &Move::classical(Player::B, 3)).unwrap();

    assert_eq!(session.phase, Phase::ReadyToCollapse);

    // The board [A, B, A, B] is certain: one outcome with probability one.
    // Column 0 is complete for A and column 1 for B, a mutual block.
    let outcomes = top_outcomes(&session, 1);
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].probability, 1.0);
    assert_eq!(outcomes[0].verdict, Verdict::Draw);
    assert_eq!(format!("{}", outcomes[0].board), "AB\nAB\n");
}

// =============================================================================
// Split Moves
// =============================================================================

#[test]
fn test_even_split_leaves_half_committed_cells() {
    let session = GameSession::new(3, Player::A);
    let session = apply_move(&session, &Move::split(Player::A, &[(0, 0.5), (1, 0.5)])).unwrap();

    for index in [0, 1] {
        let cell = session.board.cell(index).unwrap();
        assert!((cell.empty - 0.5).abs() <= EPSILON);
        assert!((cell.a - 0.5).abs() <= EPSILON);
        assert_eq!(cell.b, 0.0);
    }

    // Remaining cells untouched and still valid targets.
    assert_eq!(valid_targets(&session).len(), 9);
    assert_eq!(session.current_player, Player::B);
}

#[test]
fn test_split_summing_to_0_9_is_rejected() {
    let session = GameSession::new(3, Player::A);
    let err = apply_move(&session, &Move::split(Player::A, &[(0, 0.45), (1, 0.45)])).unwrap_err();

    match err {
        RuleViolation::SplitSumInvalid { sum } => assert!((sum - 0.9).abs() < 1e-9),
        other => panic!("unexpected error: {other:?}"),
    }
}

// =============================================================================
// Rejections Leave the Session Untouched
// =============================================================================

#[test]
fn test_classical_on_partial_cell_rejected_without_mutation() {
    let session = GameSession::new(3, Player::A);
    let session = apply_move(&session, &Move::split(Player::A, &[(0, 0.6), (1, 0.4)])).unwrap();
    let before = session.clone();

    // Cell 0 has empty probability 0.4: not fully empty.
    let err = apply_move(&session, &Move::classical(Player::B, 0)).unwrap_err();
    match err {
        RuleViolation::CellNotFullyEmpty { index, empty } => {
            assert_eq!(index, 0);
            assert!((empty - 0.4).abs() < 1e-9);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(session, before);
}

#[test]
fn test_every_rejection_kind_is_reachable() {
    let fresh = GameSession::new(2, Player::A);

    let out_of_turn = apply_move(&fresh, &Move::classical(Player::B, 0)).unwrap_err();
    assert!(matches!(out_of_turn, RuleViolation::OutOfTurn { .. }));

    let out_of_range = apply_move(&fresh, &Move::classical(Player::A, 99)).unwrap_err();
    assert!(matches!(out_of_range, RuleViolation::IndexOutOfRange { .. }));

    let duplicate =
        apply_move(&fresh, &Move::split(Player::A, &[(1, 0.5), (1, 0.5)])).unwrap_err();
    assert!(matches!(duplicate, RuleViolation::DuplicateTarget { index: 1 }));

    let lone_target = apply_move(&fresh, &Move::split(Player::A, &[(0, 1.0)])).unwrap_err();
    assert!(matches!(lone_target, RuleViolation::SplitSumInvalid { .. }));

    let mut session = fresh.clone();
    session = apply_move(&session, &Move::split(Player::A, &[(0, 0.8), (1, 0.2)])).unwrap();
    let over_capacity =
        apply_move(&session, &Move::split(Player::B, &[(0, 0.5), (2, 0.5)])).unwrap_err();
    assert!(matches!(
        over_capacity,
        RuleViolation::SplitExceedsCapacity { index: 0, .. }
    ));

    let mut done = fresh;
    let mut player = Player::A;
    for cell in 0..4 {
        done = apply_move(&done, &Move::classical(player, cell)).unwrap();
        player = player.opponent();
    }
    let wrong_phase = apply_move(&done, &Move::classical(player, 0)).unwrap_err();
    assert!(matches!(wrong_phase, RuleViolation::WrongPhase { .. }));
}

// =============================================================================
// History and Serialization
// =============================================================================

#[test]
fn test_history_records_moves_in_order() {
    let mut session = GameSession::new(2, Player::A);
    session = apply_move(&session, &Move::classical(Player::A, 3)).unwrap();
    session = apply_move(&session, &Move::split(Player::B, &[(0, 0.5), (1, 0.5)])).unwrap();

    assert_eq!(session.history.len(), 2);
    assert_eq!(session.history[0].player, Player::A);
    assert_eq!(session.history[0].sequence, 0);
    assert_eq!(session.history[1].player, Player::B);
    assert_eq!(session.history[1].sequence, 1);
    assert_eq!(session.history[1].mv.targets().as_slice(), &[0, 1]);
}

#[test]
fn test_mid_game_session_snapshot_round_trip() {
    let mut session = GameSession::new(3, Player::A);
    session = apply_move(&session, &Move::split(Player::A, &[(0, 0.25), (4, 0.75)])).unwrap();
    session = apply_move(&session, &Move::classical(Player::B, 8)).unwrap();

    let bytes = session.to_bytes().unwrap();
    let restored = GameSession::from_bytes(&bytes).unwrap();
    assert_eq!(session, restored);

    let json = serde_json::to_string(&session).unwrap();
    let restored: GameSession = serde_json::from_str(&json).unwrap();
    assert_eq!(session, restored);
}
