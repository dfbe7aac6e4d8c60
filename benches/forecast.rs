use criterion::black_box;

use quantum_grid::{
    apply_move, collapse, top_outcomes, GameRng, GameSession, Player, RandomStrategy, Strategy,
};

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .sample_size(50)
        .measurement_time(std::time::Duration::from_secs(2));
    targets =
        ranking_top_outcomes_mid_game,
        ranking_full_enumeration_2x2,
        collapsing_committed_board,
}

fn mid_game_4x4(moves: u32) -> GameSession {
    let strategy = RandomStrategy::new(0.9);
    let mut rng = GameRng::new(2024);
    let mut session = GameSession::new(4, Player::A);
    while session.moves_played < moves {
        let mv = strategy.propose(&session, &mut rng).expect("legal move");
        session = apply_move(&session, &mv).expect("proposed move validates");
    }
    session
}

fn committed(side: usize) -> GameSession {
    let strategy = RandomStrategy::new(0.9);
    let mut rng = GameRng::new(7);
    let mut session = GameSession::new(side, Player::A);
    while session.is_playing() {
        let mv = strategy.propose(&session, &mut rng).expect("legal move");
        session = apply_move(&session, &mv).expect("proposed move validates");
    }
    session
}

fn ranking_top_outcomes_mid_game(c: &mut criterion::Criterion) {
    let session = mid_game_4x4(10);
    c.bench_function("rank top-64 outcomes on a mid-game 4x4 board", |b| {
        b.iter(|| top_outcomes(black_box(&session), 64))
    });
}

fn ranking_full_enumeration_2x2(c: &mut criterion::Criterion) {
    let session = committed(2);
    c.bench_function("enumerate every outcome of a committed 2x2 board", |b| {
        b.iter(|| top_outcomes(black_box(&session), 3usize.pow(4)))
    });
}

fn collapsing_committed_board(c: &mut criterion::Criterion) {
    let session = committed(4);
    c.bench_function("collapse a committed 4x4 board", |b| {
        let mut rng = GameRng::new(1);
        b.iter(|| collapse(black_box(&session), &mut rng).unwrap())
    });
}
