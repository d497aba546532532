//! Tests for the game engine and turn state machine.

use neon_tictactoe::{Game, GameStatus, Marker, MoveError, WIN_LINES};

#[test]
fn test_new_game_initial_state() {
    let game = Game::new();
    assert_eq!(game.current_marker(), Marker::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(game.is_active());
    for pos in 0..9 {
        assert!(game.board().is_empty_cell(pos));
    }
    assert!(game.history().is_empty());
}

#[test]
fn test_moves_alternate_markers() {
    let mut game = Game::new();
    game.play(0).expect("Valid move");
    assert_eq!(game.current_marker(), Marker::O);
    game.play(4).expect("Valid move");
    assert_eq!(game.current_marker(), Marker::X);
}

#[test]
fn test_marker_count_invariant_holds_through_game() {
    let mut game = Game::new();
    for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        let x = game.board().count(Marker::X);
        let o = game.board().count(Marker::O);
        assert!(x == o || x == o + 1, "X={} O={} out of balance", x, o);
        if game.is_active() {
            game.play(pos).expect("Valid move");
        }
    }
}

#[test]
fn test_occupied_cell_rejected_without_change() {
    let mut game = Game::new();
    game.play(4).expect("Valid move");
    let before = game.clone();

    let result = game.play(4);
    assert_eq!(result, Err(MoveError::CellTaken));
    assert_eq!(game, before, "Rejected move must not change state");
}

#[test]
fn test_out_of_bounds_rejected_without_change() {
    let mut game = Game::new();
    let before = game.clone();

    assert_eq!(game.play(9), Err(MoveError::OutOfBounds));
    assert_eq!(game.play(usize::MAX), Err(MoveError::OutOfBounds));
    assert_eq!(game, before);
}

#[test]
fn test_first_row_win_detected() {
    let mut game = Game::new();
    // X takes the top row: 0, 1, 2; O plays 3, 4.
    game.play(0).expect("Valid move");
    game.play(3).expect("Valid move");
    game.play(1).expect("Valid move");
    game.play(4).expect("Valid move");
    let status = game.play(2).expect("Valid move");

    assert_eq!(status, GameStatus::Won(Marker::X));
    assert!(!game.is_active());

    let hit = game.board().winning_line().expect("Winning line present");
    assert_eq!(*hit.marker(), Marker::X);
    assert_eq!(*hit.line(), [0, 1, 2]);
}

#[test]
fn test_column_win_by_o() {
    let mut game = Game::new();
    // O takes the left column: 0, 3, 6.
    for pos in [1, 0, 2, 3, 4] {
        game.play(pos).expect("Valid move");
    }
    let status = game.play(6).expect("Valid move");
    assert_eq!(status, GameStatus::Won(Marker::O));
}

#[test]
fn test_draw_on_full_board_without_line() {
    let mut game = Game::new();
    // Ends with X at 0,2,3,7,8 and O at 1,4,5,6 — no completed line.
    for pos in [0, 1, 2, 4, 3, 5, 7, 6] {
        let status = game.play(pos).expect("Valid move");
        assert_eq!(status, GameStatus::InProgress);
    }
    let status = game.play(8).expect("Valid move");
    assert_eq!(status, GameStatus::Draw);
    assert!(!game.is_active());
    assert!(game.board().winning_line().is_none());
}

#[test]
fn test_moves_rejected_after_game_over() {
    let mut game = Game::new();
    for pos in [0, 3, 1, 4, 2] {
        game.play(pos).expect("Valid move");
    }
    assert_eq!(game.status(), GameStatus::Won(Marker::X));

    // Cell 5 is empty, but the game has ended.
    assert_eq!(game.play(5), Err(MoveError::GameOver));
}

#[test]
fn test_reset_restores_initial_state_from_terminal() {
    let mut game = Game::new();
    for pos in [0, 3, 1, 4, 2] {
        game.play(pos).expect("Valid move");
    }
    assert!(!game.is_active());

    game.reset();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.current_marker(), Marker::X);
    assert!(game.history().is_empty());
    for pos in 0..9 {
        assert!(game.board().is_empty_cell(pos));
    }
}

#[test]
fn test_win_lines_declared_rows_columns_diagonals() {
    assert_eq!(WIN_LINES.len(), 8);
    assert_eq!(WIN_LINES[0], [0, 1, 2]);
    assert_eq!(WIN_LINES[2], [6, 7, 8]);
    assert_eq!(WIN_LINES[3], [0, 3, 6]);
    assert_eq!(WIN_LINES[6], [0, 4, 8]);
    assert_eq!(WIN_LINES[7], [2, 4, 6]);
}
