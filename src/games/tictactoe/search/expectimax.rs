//! Expectimax against a uniformly random opponent.
//!
//! The searching side takes the maximum over its replies. The opponent is a
//! chance node that picks each empty square with equal probability, so its
//! value is the mean of its children. Values are from the searching side's
//! point of view: `+10` win, `-10` loss, `0` draw.

use super::{MAX_DEPTH, SearchStats};
use crate::games::tictactoe::rules::{DRAW, evaluate, has_moves_left};
use crate::games::tictactoe::{Board, Move, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Expected values closer than this are treated as equal.
///
/// Mirror-image squares sum their replies in different orders, so their
/// averages can differ in the last bit. Distinct values lie much further
/// apart.
pub const TIE_TOLERANCE: f64 = 1e-9;

/// A root square with its expected value for the searching side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpectedMove {
    /// Square to play.
    pub position: Position,
    /// Expected score against a random opponent.
    pub expected: f64,
}

/// Returns the square with the highest expected value, or `None` on a full
/// board.
///
/// Ties go to the first square in row-major order.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, side: Player) -> Option<ExpectedMove> {
    best_move_with_stats(board, side).0
}

/// Like [`best_move`], also counting visited boards.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move_with_stats(
    board: &Board,
    side: Player,
) -> (Option<ExpectedMove>, SearchStats) {
    let mut stats = SearchStats::default();
    let candidates = candidates_with_stats(board, side, &mut stats);
    let best = pick_highest(candidates);
    debug!(?best, nodes = stats.nodes, "Expectimax finished");
    (best, stats)
}

/// Expected value of every empty square, in row-major order.
#[instrument(skip(board), fields(board = %board))]
pub fn candidates(board: &Board, side: Player) -> Vec<ExpectedMove> {
    let mut stats = SearchStats::default();
    candidates_with_stats(board, side, &mut stats)
}

pub(crate) fn candidates_with_stats(
    board: &Board,
    side: Player,
    stats: &mut SearchStats,
) -> Vec<ExpectedMove> {
    let mut scratch = *board;
    let empties: Vec<Position> = board.empty_positions().collect();
    let scored = empties
        .into_iter()
        .map(|position| ExpectedMove {
            position,
            expected: score_candidate(&mut scratch, position, side, stats),
        })
        .collect();
    debug_assert_eq!(scratch, *board, "search left residue on scratch board");
    scored
}

/// First candidate with the highest expected value, up to [`TIE_TOLERANCE`].
pub(crate) fn pick_highest(
    candidates: impl IntoIterator<Item = ExpectedMove>,
) -> Option<ExpectedMove> {
    let mut best: Option<ExpectedMove> = None;
    for candidate in candidates {
        let higher = best.is_none_or(|c| candidate.expected > c.expected + TIE_TOLERANCE);
        if higher {
            best = Some(candidate);
        }
    }
    best
}

/// Converts to a [`Move`] scored from X's point of view, rounding the
/// expectation.
pub(crate) fn as_move(best: Option<ExpectedMove>, side: Player) -> Move {
    match best {
        Some(candidate) => {
            let rounded = candidate.expected.round() as i32;
            Move::at(candidate.position, orient(rounded, side))
        }
        None => Move::NONE,
    }
}

/// Expected value of `side` playing `pos`. Restores `scratch` before returning.
pub(crate) fn score_candidate(
    scratch: &mut Board,
    pos: Position,
    side: Player,
    stats: &mut SearchStats,
) -> f64 {
    scratch.set(pos, Square::Occupied(side));
    let value = search(scratch, side, side.opponent(), 1, stats);
    scratch.set(pos, Square::Empty);
    value
}

/// Flips an X-oriented score to `side`'s point of view (and back).
fn orient(score: i32, side: Player) -> i32 {
    if side.is_maximizer() { score } else { -score }
}

fn search(
    board: &mut Board,
    root: Player,
    to_move: Player,
    depth: u8,
    stats: &mut SearchStats,
) -> f64 {
    stats.nodes += 1;
    debug_assert!(depth <= MAX_DEPTH, "search deeper than the board allows");

    let score = evaluate(board);
    if score != DRAW || !has_moves_left(board) {
        return f64::from(orient(score, root));
    }

    let mut best = f64::NEG_INFINITY;
    let mut total = 0.0;
    let mut count = 0u32;
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(to_move));
        let child = search(board, root, to_move.opponent(), depth + 1, stats);
        board.set(pos, Square::Empty);

        best = best.max(child);
        total += child;
        count += 1;
    }

    if to_move == root {
        best
    } else {
        total / f64::from(count)
    }
}
