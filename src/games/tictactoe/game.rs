//! Explicit game state threaded through the turn loop.
//!
//! A front-end owns one [`GameState`] and feeds it human moves through
//! [`GameState::place`] and CPU moves through [`GameState::play_best`].

use super::action::{Move, PlaceError};
use super::rules::{self, outcome};
use super::search::{self, Algorithm};
use super::{Board, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Board, side to move and move history of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    to_move: Player,
    /// Move history (positions played).
    history: Vec<Position>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
        }
    }

    /// Resumes from an arbitrary board, with the side to move implied by the
    /// mark counts. History starts empty.
    #[instrument(skip(board), fields(board = %board))]
    pub fn from_board(board: Board) -> Self {
        if !rules::turn_parity_ok(&board) {
            warn!("Resuming from a board with illegal turn parity");
        }
        Self {
            to_move: board.implied_to_move(),
            board,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Current outcome, recomputed from the board.
    pub fn outcome(&self) -> Outcome {
        outcome(&self.board)
    }

    /// Places the current player's mark at `pos` and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::GameOver`] once the game has ended and
    /// [`PlaceError::SquareOccupied`] for a taken square. The state is
    /// unchanged on error.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<(), PlaceError> {
        if self.outcome().is_terminal() {
            warn!(%pos, "Move rejected, game is over");
            return Err(PlaceError::GameOver);
        }

        self.board.place(pos, self.to_move)?;
        self.history.push(pos);
        self.to_move = self.to_move.opponent();

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Game over");
        } else {
            debug!(%pos, next = %self.to_move, "Move applied");
        }
        Ok(())
    }

    /// Searches for the current player's best move and plays it.
    ///
    /// Returns the move played, or [`Move::NONE`] without touching the state
    /// when the board is full.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::GameOver`] if a line is already complete.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play_best(&mut self, algorithm: Algorithm) -> Result<Move, PlaceError> {
        if let Outcome::Won(_) = self.outcome() {
            return Err(PlaceError::GameOver);
        }

        let mv = search::best_move(&self.board, self.to_move, algorithm);
        if let Some(pos) = mv.position() {
            self.place(pos)?;
            info!(%mv, "CPU move");
        }
        Ok(mv)
    }

    /// Starts over: empty board, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// A finished CPU-vs-CPU game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Moves in the order they were played.
    pub moves: Vec<Move>,
    /// Final board.
    pub board: Board,
    /// Final outcome.
    pub outcome: Outcome,
}

/// Plays `state` to the end, X using `algorithm_x` and O using `algorithm_o`.
#[instrument(skip(state), fields(board = %state.board()))]
pub fn self_play(
    mut state: GameState,
    algorithm_x: Algorithm,
    algorithm_o: Algorithm,
) -> GameRecord {
    let mut moves = Vec::new();
    while !state.outcome().is_terminal() {
        let algorithm = match state.to_move() {
            Player::X => algorithm_x,
            Player::O => algorithm_o,
        };
        match state.play_best(algorithm) {
            Ok(mv) if !mv.is_none() => moves.push(mv),
            _ => break,
        }
    }

    let outcome = state.outcome();
    info!(%outcome, moves = moves.len(), "Self-play finished");
    GameRecord {
        moves,
        board: *state.board(),
        outcome,
    }
}
