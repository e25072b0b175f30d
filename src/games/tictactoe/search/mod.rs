//! Game-tree search for the optimal move.
//!
//! Every search copies the caller's board into an owned scratch board and
//! passes it by `&mut` down the recursion. Each frame places a mark, recurses
//! and restores the square before returning, so the scratch board is back to
//! the root position when the search ends and the caller's board is never
//! touched.

pub mod alpha_beta;
pub mod expectimax;
pub mod minimax;
pub mod parallel;

use super::{Board, Move, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Deepest ply any search can reach on a 3x3 board.
pub const MAX_DEPTH: u8 = 9;

/// Search algorithm used to pick a move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Algorithm {
    /// Full-width minimax.
    Minimax,
    /// Minimax with alpha-beta pruning. Same moves, fewer nodes.
    #[default]
    AlphaBeta,
    /// Maximizes against an opponent that plays uniformly at random.
    Expectimax,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, including the root candidates.
    pub nodes: u64,
}

impl SearchStats {
    /// Adds another search's counters into this one.
    pub fn merge(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
    }
}

/// Returns the best move for `side` using `algorithm`.
///
/// Returns [`Move::NONE`] when the board is full.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, side: Player, algorithm: Algorithm) -> Move {
    best_move_with_stats(board, side, algorithm).0
}

/// Like [`best_move`], also returning the search counters.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move_with_stats(
    board: &Board,
    side: Player,
    algorithm: Algorithm,
) -> (Move, SearchStats) {
    let (mv, stats) = match algorithm {
        Algorithm::Minimax => minimax::best_move_with_stats(board, side),
        Algorithm::AlphaBeta => alpha_beta::best_move_with_stats(board, side),
        Algorithm::Expectimax => {
            let (best, stats) = expectimax::best_move_with_stats(board, side);
            (expectimax::as_move(best, side), stats)
        }
    };
    debug!(
        row = mv.row,
        col = mv.col,
        score = mv.score,
        nodes = stats.nodes,
        "Search finished"
    );
    (mv, stats)
}

/// Scores every empty square for `side`.
///
/// Results are in row-major order. `Algorithm::Expectimax` reports expected
/// values rounded to the nearest integer, oriented like minimax scores.
#[instrument(skip(board), fields(board = %board))]
pub fn candidates(board: &Board, side: Player, algorithm: Algorithm) -> Vec<Move> {
    analyze(board, side, algorithm).candidates
}

/// Scores of every root square and the move chosen from them, from a single
/// search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Chosen move, as [`best_move`] returns it.
    pub best: Move,
    /// One entry per empty square, in row-major order.
    pub candidates: Vec<Move>,
    /// Unrounded expected values, for `Algorithm::Expectimax` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Vec<expectimax::ExpectedMove>>,
    /// Counters for the whole search.
    pub stats: SearchStats,
}

/// Scores every empty square once and picks the best of them.
///
/// `best` and `stats` match [`best_move_with_stats`].
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board, side: Player, algorithm: Algorithm) -> Analysis {
    let mut stats = SearchStats::default();
    let analysis = match algorithm {
        Algorithm::Minimax | Algorithm::AlphaBeta => {
            let mut scratch = *board;
            let candidates = root_candidates(&mut scratch, side, &mut stats, scorer(algorithm));
            debug_assert_eq!(scratch, *board, "search left residue on scratch board");
            Analysis {
                best: pick_best(side, candidates.iter().copied()),
                candidates,
                expected: None,
                stats,
            }
        }
        Algorithm::Expectimax => {
            let expected = expectimax::candidates_with_stats(board, side, &mut stats);
            let highest = expectimax::pick_highest(expected.iter().copied());
            Analysis {
                best: expectimax::as_move(highest, side),
                candidates: expected
                    .iter()
                    .map(|c| expectimax::as_move(Some(*c), side))
                    .collect(),
                expected: Some(expected),
                stats,
            }
        }
    };
    debug!(best = %analysis.best, nodes = analysis.stats.nodes, "Analysis finished");
    analysis
}

/// Scores one root square: places the mark, searches, and undoes it.
pub(crate) type Scorer = fn(&mut Board, Position, Player, &mut SearchStats) -> i32;

/// Root scorer of an exact algorithm. Expectimax maps to alpha-beta.
pub(crate) fn scorer(algorithm: Algorithm) -> Scorer {
    match algorithm {
        Algorithm::Minimax => minimax::score_candidate,
        Algorithm::AlphaBeta | Algorithm::Expectimax => alpha_beta::score_candidate,
    }
}

/// Scores each empty square of `scratch` with `score`, in row-major order.
pub(crate) fn root_candidates<F>(
    scratch: &mut Board,
    side: Player,
    stats: &mut SearchStats,
    score: F,
) -> Vec<Move>
where
    F: Fn(&mut Board, Position, Player, &mut SearchStats) -> i32,
{
    let empties: Vec<Position> = scratch.empty_positions().collect();
    empties
        .into_iter()
        .map(|pos| Move::at(pos, score(scratch, pos, side, stats)))
        .collect()
}

/// Picks the best candidate for `side`: highest score for X, lowest for O.
///
/// Ties keep the earliest candidate. Returns [`Move::NONE`] for no
/// candidates.
pub(crate) fn pick_best(side: Player, candidates: impl IntoIterator<Item = Move>) -> Move {
    let mut best: Option<Move> = None;
    for candidate in candidates {
        let better = match best {
            None => true,
            Some(current) if side.is_maximizer() => candidate.score > current.score,
            Some(current) => candidate.score < current.score,
        };
        if better {
            best = Some(candidate);
        }
    }
    best.unwrap_or(Move::NONE)
}
