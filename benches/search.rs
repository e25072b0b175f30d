use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_minimax::{Algorithm, Board, Player, alpha_beta, minimax, parallel};

const CORPUS: [&str; 5] = [
    "_________",
    "____X____",
    "X___O____",
    "XO__X____",
    "XOX/OXO/___",
];

fn corpus() -> Vec<(Board, Player)> {
    CORPUS
        .iter()
        .map(|text| {
            let board: Board = text.parse().expect("valid board");
            let side = board.implied_to_move();
            (board, side)
        })
        .collect()
}

fn bench_sequential(c: &mut Criterion) {
    let boards = corpus();

    c.bench_function("search/minimax", |b| {
        b.iter(|| {
            for (board, side) in &boards {
                black_box(minimax::best_move(black_box(board), *side));
            }
        })
    });

    c.bench_function("search/alpha_beta", |b| {
        b.iter(|| {
            for (board, side) in &boards {
                black_box(alpha_beta::best_move(black_box(board), *side));
            }
        })
    });
}

fn bench_parallel(c: &mut Criterion) {
    let boards = corpus();

    c.bench_function("search/parallel_alpha_beta", |b| {
        b.iter(|| {
            for (board, side) in &boards {
                let mv = parallel::best_move(black_box(board), *side, Algorithm::AlphaBeta);
                black_box(mv);
            }
        })
    });
}

criterion_group!(benches, bench_sequential, bench_parallel);
criterion_main!(benches);
