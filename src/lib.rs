//! Optimal tic-tac-toe move search.
//!
//! Given a board and the side to move, the search explores every reachable
//! continuation and returns the move that is best against optimal play.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of squares, the only mutable piece of state
//! - **Rules**: pure evaluation (win, draw, in progress)
//! - **Search**: minimax, alpha-beta, expectimax and a root-parallel driver
//! - **GameState**: board, side to move and history for a turn loop
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{Algorithm, Board, Player, Position, best_move};
//!
//! let board: Board = "XOX/OXO/___".parse().unwrap();
//! let mv = best_move(&board, Player::X, Algorithm::AlphaBeta);
//! assert_eq!(mv.position(), Some(Position::BottomLeft));
//! assert_eq!(mv.score, 10);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Algorithm, Board, GameRecord, GameState, Move, Outcome, ParseBoardError, ParsePlayerError,
    PlaceError, Player, Position, Square, self_play,
};

// Crate-level exports - Evaluation and search
pub use games::tictactoe::rules::{
    self, DRAW, PLAYER_ONE_WIN, PLAYER_TWO_WIN, check_winner, evaluate, has_moves_left, outcome,
};
pub use games::tictactoe::search::{
    self, Analysis, SearchStats, alpha_beta, analyze, best_move, best_move_with_stats, candidates,
    expectimax, minimax, parallel,
};
