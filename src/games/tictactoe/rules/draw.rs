//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;

/// Returns true iff at least one square is empty.
pub fn has_moves_left(board: &Board) -> bool {
    board.squares().iter().any(|s| *s == Square::Empty)
}

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    !has_moves_left(board)
}

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    #[test]
    fn test_empty_board_has_moves() {
        let board = Board::new();
        assert!(has_moves_left(&board));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_one_empty_square_has_moves() {
        let board: Board = "XOX/XOO/OX_".parse().unwrap();
        assert!(has_moves_left(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert!(is_full(&board));
        assert!(!has_moves_left(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXX/OOX/OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
