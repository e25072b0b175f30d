//! Tests for the game state and CPU-vs-CPU play.

use tictactoe_minimax::{
    Algorithm, Board, GameState, Outcome, PlaceError, Player, Position, self_play,
};

#[test]
fn test_place_rejects_occupied_square() {
    let mut board = Board::new();
    board.place(Position::Center, Player::X).unwrap();
    let before = board;

    let result = board.place(Position::Center, Player::O);
    assert_eq!(result, Err(PlaceError::SquareOccupied(Position::Center)));
    assert!(result.unwrap_err().to_string().contains("occupied"));
    assert_eq!(board, before);
}

#[test]
fn test_human_then_cpu_turns() {
    let mut game = GameState::new();
    game.place(Position::Center).unwrap();
    let mv = game.play_best(Algorithm::AlphaBeta).unwrap();

    assert!(mv.position().is_some_and(Position::is_corner));
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_cpu_blocks_human_threat() {
    let mut game = GameState::new();
    game.place(Position::TopLeft).unwrap();
    game.place(Position::BottomCenter).unwrap();
    game.place(Position::MiddleLeft).unwrap();

    let mv = game.play_best(Algorithm::Minimax).unwrap();
    assert_eq!(mv.position(), Some(Position::BottomLeft));
    assert_eq!(game.outcome(), Outcome::InProgress);
}

#[test]
fn test_perfect_play_draws_for_every_algorithm_pair() {
    let exact = [Algorithm::Minimax, Algorithm::AlphaBeta];
    for x in exact {
        for o in exact {
            let record = self_play(GameState::new(), x, o);
            assert_eq!(record.outcome, Outcome::Draw, "{x} vs {o}");
            assert_eq!(record.moves.len(), 9);
        }
    }
}

#[test]
fn test_self_play_from_midgame_resumes_with_implied_side() {
    let state = GameState::from_board("XX_/OO_/___".parse().unwrap());
    assert_eq!(state.to_move(), Player::X);

    let record = self_play(state, Algorithm::AlphaBeta, Algorithm::AlphaBeta);
    assert_eq!(record.outcome, Outcome::Won(Player::X));
    assert_eq!(record.moves.len(), 1);
    assert_eq!(record.moves[0].position(), Some(Position::TopRight));
}

#[test]
fn test_reset_starts_new_game() {
    let mut game = GameState::new();
    game.place(Position::Center).unwrap();
    game.reset();
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.to_move(), Player::X);
    assert!(game.history().is_empty());
}
