//! Minimax with alpha-beta pruning.
//!
//! Reports the same move and score as [`super::minimax`] for every board.
//! Each root candidate is searched with the full window, so root ties are
//! broken exactly as the plain search breaks them; pruning happens only
//! below the root.

use super::{MAX_DEPTH, SearchStats, pick_best, root_candidates};
use crate::games::tictactoe::rules::{DRAW, evaluate, has_moves_left};
use crate::games::tictactoe::{Board, Move, Player, Position, Square};
use tracing::{debug, instrument};

/// Returns the best move for `side`, or [`Move::NONE`] on a full board.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, side: Player) -> Move {
    best_move_with_stats(board, side).0
}

/// Like [`best_move`], also counting visited boards.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move_with_stats(board: &Board, side: Player) -> (Move, SearchStats) {
    let mut scratch = *board;
    let mut stats = SearchStats::default();
    let candidates = root_candidates(&mut scratch, side, &mut stats, score_candidate);
    debug_assert_eq!(scratch, *board, "search left residue on scratch board");

    let best = pick_best(side, candidates);
    debug!(%best, nodes = stats.nodes, "Alpha-beta finished");
    (best, stats)
}

/// Minimax value of `board` with `to_move` to play, computed with pruning.
#[instrument(skip(board), fields(board = %board))]
pub fn value(board: &Board, to_move: Player) -> i32 {
    let mut scratch = *board;
    let mut stats = SearchStats::default();
    search(&mut scratch, to_move, 0, i32::MIN, i32::MAX, &mut stats)
}

/// Value of `side` playing `pos` on `scratch`. Restores `scratch` before returning.
pub(crate) fn score_candidate(
    scratch: &mut Board,
    pos: Position,
    side: Player,
    stats: &mut SearchStats,
) -> i32 {
    scratch.set(pos, Square::Occupied(side));
    let score = search(scratch, side.opponent(), 1, i32::MIN, i32::MAX, stats);
    scratch.set(pos, Square::Empty);
    score
}

/// `alpha` is what X can already guarantee, `beta` what O can.
fn search(
    board: &mut Board,
    to_move: Player,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;
    debug_assert!(depth <= MAX_DEPTH, "search deeper than the board allows");

    let score = evaluate(board);
    if score != DRAW {
        return score;
    }
    if !has_moves_left(board) {
        return DRAW;
    }

    if to_move.is_maximizer() {
        let mut best = i32::MIN;
        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, Square::Occupied(to_move));
            let child = search(board, to_move.opponent(), depth + 1, alpha, beta, stats);
            board.set(pos, Square::Empty);

            best = best.max(child);
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, Square::Occupied(to_move));
            let child = search(board, to_move.opponent(), depth + 1, alpha, beta, stats);
            board.set(pos, Square::Empty);

            best = best.min(child);
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
