//! Tic-tac-toe: board model, rules and optimal-move search.
//!
//! Dependencies run one way: the board knows nothing of the rules, and the
//! rules know nothing of the search.

mod action;
mod game;
mod position;
mod types;

pub mod rules;
pub mod search;

pub use action::{Move, PlaceError};
pub use game::{GameRecord, GameState, self_play};
pub use position::Position;
pub use search::Algorithm;
pub use types::{Board, Outcome, ParseBoardError, ParsePlayerError, Player, Square};
