//! Root-parallel search with rayon.
//!
//! Each root candidate is scored on its own copy of the board, so workers
//! never see each other's tentative marks. Results come back in row-major
//! order and go through the same tie-break as the sequential search.

use super::{Algorithm, SearchStats, expectimax, pick_best, scorer};
use crate::games::tictactoe::{Board, Move, Player, Position};
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Parallel version of [`super::best_move`]. Same result, split across threads.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, side: Player, algorithm: Algorithm) -> Move {
    best_move_with_stats(board, side, algorithm).0
}

/// Like [`best_move`], also returning the summed counters of all workers.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move_with_stats(
    board: &Board,
    side: Player,
    algorithm: Algorithm,
) -> (Move, SearchStats) {
    let empties: Vec<Position> = board.empty_positions().collect();
    let mut stats = SearchStats::default();

    let best = match algorithm {
        Algorithm::Minimax | Algorithm::AlphaBeta => {
            let score = scorer(algorithm);
            let scored: Vec<(Move, SearchStats)> = empties
                .par_iter()
                .map(|&pos| {
                    let mut scratch = *board;
                    let mut local = SearchStats::default();
                    let value = score(&mut scratch, pos, side, &mut local);
                    (Move::at(pos, value), local)
                })
                .collect();
            for (_, local) in &scored {
                stats.merge(*local);
            }
            pick_best(side, scored.into_iter().map(|(mv, _)| mv))
        }
        Algorithm::Expectimax => {
            let scored: Vec<(expectimax::ExpectedMove, SearchStats)> = empties
                .par_iter()
                .map(|&position| {
                    let mut scratch = *board;
                    let mut local = SearchStats::default();
                    let expected =
                        expectimax::score_candidate(&mut scratch, position, side, &mut local);
                    (expectimax::ExpectedMove { position, expected }, local)
                })
                .collect();
            for (_, local) in &scored {
                stats.merge(*local);
            }
            let highest = scored.into_iter().map(|(candidate, _)| candidate);
            expectimax::as_move(expectimax::pick_highest(highest), side)
        }
    };

    debug!(%best, nodes = stats.nodes, workers = empties.len(), "Parallel search finished");
    (best, stats)
}
