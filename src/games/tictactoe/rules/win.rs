//! Win detection and static evaluation for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

/// Score of a board where X (player one) has three in a row.
pub const PLAYER_ONE_WIN: i32 = 10;

/// Score of a board where O (player two) has three in a row.
pub const PLAYER_TWO_WIN: i32 = -10;

/// Score of a board with no completed line.
pub const DRAW: i32 = 0;

/// The eight winning lines, checked in this order.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in row, column, diagonal
/// order, or `None`.
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        if let Square::Occupied(player) = board.get(a)
            && board.get(b) == Square::Occupied(player)
            && board.get(c) == Square::Occupied(player)
        {
            return Some(player);
        }
    }

    None
}

/// Static score of the board.
///
/// [`PLAYER_ONE_WIN`] or [`PLAYER_TWO_WIN`] for a completed line, else
/// [`DRAW`]. A zero here only means "no line yet": pair it with
/// [`super::has_moves_left`] to tell a draw from a game in progress.
pub fn evaluate(board: &Board) -> i32 {
    match check_winner(board) {
        Some(Player::X) => PLAYER_ONE_WIN,
        Some(Player::O) => PLAYER_TWO_WIN,
        None => DRAW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(evaluate(&board), DRAW);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(evaluate(&board), PLAYER_ONE_WIN);
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "XO_/XO_/_O_".parse().unwrap();
        assert_eq!(evaluate(&board), PLAYER_TWO_WIN);
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "__X/_X_/X__".parse().unwrap();
        assert_eq!(evaluate(&board), PLAYER_ONE_WIN);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XOX/___/___".parse().unwrap();
        assert_eq!(evaluate(&board), DRAW);
    }
}
