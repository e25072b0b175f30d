//! Move recommendations and placement errors.

use super::Position;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A recommended move: the cell to play and the score the search gave it.
///
/// Scores are from X's point of view: `+10` is a forced X win, `-10` a
/// forced O win, `0` a draw. When no legal move exists the search returns
/// [`Move::NONE`], with `row == col == -1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Row of the cell (0-2), or -1 for no move.
    pub row: i8,
    /// Column of the cell (0-2), or -1 for no move.
    pub col: i8,
    /// Search score for playing this cell.
    pub score: i32,
}

impl Move {
    /// Sentinel returned when the board has no empty square.
    pub const NONE: Move = Move {
        row: -1,
        col: -1,
        score: 0,
    };

    /// Creates a move for `position` with the given score.
    pub fn at(position: Position, score: i32) -> Self {
        Self {
            row: position.row() as i8,
            col: position.col() as i8,
            score,
        }
    }

    /// Returns true for the [`Move::NONE`] sentinel.
    pub fn is_none(&self) -> bool {
        self.row < 0 || self.col < 0
    }

    /// The board position, or `None` for the sentinel.
    pub fn position(&self) -> Option<Position> {
        if self.is_none() {
            return None;
        }
        Position::from_row_col(self.row as usize, self.col as usize)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            Some(pos) => write!(
                f,
                "{} (row {}, col {}) score {}",
                pos.label(),
                self.row,
                self.col,
                self.score
            ),
            None => write!(f, "no move"),
        }
    }
}

/// Error that can occur when placing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// Coordinates are outside the 3x3 grid.
    #[display("Position (row {}, col {}) is out of bounds", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for PlaceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_sentinel() {
        assert!(Move::NONE.is_none());
        assert_eq!(Move::NONE.row, -1);
        assert_eq!(Move::NONE.col, -1);
        assert_eq!(Move::NONE.position(), None);
        assert_eq!(Move::NONE.to_string(), "no move");
    }

    #[test]
    fn test_at_maps_row_and_col() {
        let mv = Move::at(Position::MiddleRight, 10);
        assert_eq!((mv.row, mv.col, mv.score), (1, 2, 10));
        assert_eq!(mv.position(), Some(Position::MiddleRight));
        assert_eq!(mv, Move::new(1, 2, 10));
    }

    #[test]
    fn test_error_messages() {
        let err = PlaceError::SquareOccupied(Position::Center);
        assert!(err.to_string().contains("occupied"));
        let err = PlaceError::OutOfBounds { row: 4, col: 1 };
        assert!(err.to_string().contains("out of bounds"));
    }
}
