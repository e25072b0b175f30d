//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Nothing
//! here mutates the board or knows about the search.

pub mod draw;
pub mod win;

pub use draw::{has_moves_left, is_draw, is_full};
pub use win::{DRAW, PLAYER_ONE_WIN, PLAYER_TWO_WIN, check_winner, evaluate};

use super::{Board, Outcome, Player};
use tracing::{instrument, warn};

/// Classifies the board: a completed line wins, else a full board draws.
#[instrument(skip(board), fields(board = %board))]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Checks the alternation invariant: X has as many marks as O, or one more.
///
/// The search assumes this holds but never checks it.
#[instrument(skip(board), fields(board = %board))]
pub fn turn_parity_ok(board: &Board) -> bool {
    let x_count = board.count(Player::X);
    let o_count = board.count(Player::O);
    let valid = x_count == o_count || x_count == o_count + 1;
    if !valid {
        warn!(x_count, o_count, "Turn parity violated");
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_in_progress() {
        assert_eq!(outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_outcome_win_beats_full_board() {
        let board: Board = "XXX/OOX/XOO".parse().unwrap();
        assert_eq!(outcome(&board), Outcome::Won(Player::X));
    }

    #[test]
    fn test_outcome_draw() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(outcome(&board), Outcome::Draw);
    }

    #[test]
    fn test_turn_parity() {
        assert!(turn_parity_ok(&"X__/___/___".parse().unwrap()));
        assert!(turn_parity_ok(&"XO_/___/___".parse().unwrap()));
        assert!(!turn_parity_ok(&"O__/___/___".parse().unwrap()));
        assert!(!turn_parity_ok(&"XX_/___/___".parse().unwrap()));
    }
}
