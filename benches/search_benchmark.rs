use isolation::board::{Board, Move};
use isolation::evaluate::ImprovedScore;
use isolation::search::{
    alpha_beta_search, iterative_deepening, minimax_search, GameState, SearchContext, Unlimited,
};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

fn criterion_benchmark(c: &mut Criterion) {
    let board = opening();

    c.bench_function("minimax depth 3", |b| {
        b.iter(|| {
            let mut context = SearchContext::new(Duration::ZERO).with_seed(1);
            minimax_search(&mut context, black_box(&board), &ImprovedScore, &Unlimited, 3)
        })
    });

    c.bench_function("alpha beta depth 3", |b| {
        b.iter(|| {
            let mut context = SearchContext::new(Duration::ZERO).with_seed(1);
            alpha_beta_search(
                &mut context,
                black_box(&board),
                &ImprovedScore,
                &Unlimited,
                3,
                f64::NEG_INFINITY,
                f64::INFINITY,
            )
        })
    });

    c.bench_function("iterative deepening depth 5", |b| {
        b.iter(|| {
            let mut context = SearchContext::new(Duration::ZERO).with_seed(1);
            iterative_deepening(&mut context, black_box(&board), &ImprovedScore, &Unlimited, 5)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

/// Both players placed near the middle of a 5x5 board.
fn opening() -> Board {
    Board::new(5, 5)
        .unwrap()
        .forecast(&Move::new(2, 2))
        .forecast(&Move::new(1, 3))
}
