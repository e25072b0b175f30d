//! Plain minimax over the full game tree.
//!
//! At most 9! boards are reachable from the empty board, so the search
//! always runs to the end of the game with no depth cutoff.

use super::{MAX_DEPTH, SearchStats, pick_best, root_candidates};
use crate::games::tictactoe::rules::{DRAW, evaluate, has_moves_left};
use crate::games::tictactoe::{Board, Move, Player, Position, Square};
use tracing::{debug, instrument};

/// Returns the best move for `side`, or [`Move::NONE`] on a full board.
///
/// Ties go to the first empty square in row-major order.
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
    debug!(%best, nodes = stats.nodes, "Minimax finished");
    (best, stats)
}

/// Minimax value of `board` with `to_move` to play, from X's point of view.
#[instrument(skip(board), fields(board = %board))]
pub fn value(board: &Board, to_move: Player) -> i32 {
    let mut scratch = *board;
    let mut stats = SearchStats::default();
    search(&mut scratch, to_move, 0, &mut stats)
}

/// Value of `side` playing `pos` on `scratch`. Restores `scratch` before returning.
pub(crate) fn score_candidate(
    scratch: &mut Board,
    pos: Position,
    side: Player,
    stats: &mut SearchStats,
) -> i32 {
    scratch.set(pos, Square::Occupied(side));
    let score = search(scratch, side.opponent(), 1, stats);
    scratch.set(pos, Square::Empty);
    score
}

fn search(board: &mut Board, to_move: Player, depth: u8, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;
    debug_assert!(depth <= MAX_DEPTH, "search deeper than the board allows");

    // A completed line ends the game even with squares left.
    let score = evaluate(board);
    if score != DRAW {
        return score;
    }
    if !has_moves_left(board) {
        return DRAW;
    }

    let maximizing = to_move.is_maximizer();
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(to_move));
        let child = search(board, to_move.opponent(), depth + 1, stats);
        board.set(pos, Square::Empty);

        best = if maximizing {
            best.max(child)
        } else {
            best.min(child)
        };
    }
    best
}
