//! Tests for the optimal-move search.

use std::collections::HashSet;
use strum::IntoEnumIterator;
use tictactoe_minimax::{
    Algorithm, Board, Move, Outcome, PLAYER_ONE_WIN, Player, Position, alpha_beta, best_move,
    evaluate, has_moves_left, minimax, outcome, parallel,
};

/// Every board reachable from the empty board by alternating play, X first.
fn reachable_boards() -> Vec<Board> {
    fn walk(board: Board, to_move: Player, seen: &mut HashSet<Board>, out: &mut Vec<Board>) {
        if !seen.insert(board) {
            return;
        }
        out.push(board);
        if outcome(&board).is_terminal() {
            return;
        }
        for pos in board.empty_positions() {
            let mut child = board;
            child.place(pos, to_move).unwrap();
            walk(child, to_move.opponent(), seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(Board::new(), Player::X, &mut seen, &mut out);
    out
}

#[test]
fn test_reachable_board_count() {
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_alpha_beta_matches_minimax_everywhere() {
    for board in reachable_boards() {
        for side in [Player::X, Player::O] {
            let plain = minimax::best_move(&board, side);
            let pruned = alpha_beta::best_move(&board, side);
            assert_eq!(plain, pruned, "board {board}, {side} to move");
        }
    }
}

#[test]
fn test_empty_board_evaluates_to_draw_score() {
    let board = Board::new();
    assert_eq!(evaluate(&board), 0);
    assert!(has_moves_left(&board));
}

#[test]
fn test_completed_row_wins_with_empty_squares_left() {
    let board: Board = "XXX/_O_/__O".parse().unwrap();
    assert_eq!(evaluate(&board), PLAYER_ONE_WIN);
    assert_eq!(outcome(&board), Outcome::Won(Player::X));
}

#[test]
fn test_opening_move_is_corner_or_center_and_draws() {
    let board = Board::new();
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let mv = best_move(&board, Player::X, algorithm);
        let pos = mv.position().expect("empty board has moves");
        assert!(
            pos.is_corner() || pos == Position::Center,
            "{algorithm} opened {pos}"
        );
        assert_eq!(mv.score, 0);
    }
    assert_eq!(minimax::value(&board, Player::X), 0);
}

#[test]
fn test_completes_winning_line() {
    let board: Board = "XOX/OXO/___".parse().unwrap();
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let mv = best_move(&board, Player::X, algorithm);
        assert_eq!(mv.score, PLAYER_ONE_WIN);

        let mut after = board;
        after
            .place(mv.position().expect("moves left"), Player::X)
            .unwrap();
        assert_eq!(evaluate(&after), PLAYER_ONE_WIN);
    }
}

#[test]
fn test_search_leaves_board_untouched() {
    for text in ["_________", "X___O____", "XOX/OXO/___", "XX_/OO_/X_O"] {
        let board: Board = text.parse().unwrap();
        let before = board;
        for algorithm in Algorithm::iter() {
            for side in [Player::X, Player::O] {
                let _ = best_move(&board, side, algorithm);
                let _ = parallel::best_move(&board, side, algorithm);
                assert_eq!(board, before);
            }
        }
    }
}

#[test]
fn test_full_board_returns_sentinel() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    for algorithm in Algorithm::iter() {
        let mv = best_move(&board, Player::X, algorithm);
        assert_eq!(mv, Move::NONE);
        assert_eq!((mv.row, mv.col), (-1, -1));
    }
}

#[test]
fn test_o_prefers_win_over_block() {
    // O can win on the top row or block X's middle row; winning comes first.
    let board: Board = "OO_/XX_/X__".parse().unwrap();
    let mv = best_move(&board, Player::O, Algorithm::AlphaBeta);
    assert_eq!(mv.position(), Some(Position::TopRight));
}

#[test]
fn test_expectimax_agrees_on_forced_wins() {
    let board: Board = "XOX/OXO/___".parse().unwrap();
    let mv = best_move(&board, Player::X, Algorithm::Expectimax);
    assert_eq!(mv.score, PLAYER_ONE_WIN);
}
