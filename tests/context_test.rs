//! Tests for the session context: engine, session, and store wired together.

use neon_tictactoe::{GameStatus, JsonFileStore, Marker, SessionContext};
use tempfile::TempDir;

fn setup_context() -> (TempDir, SessionContext) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonFileStore::new(dir.path().join("store.json"));
    let ctx = SessionContext::new(Box::new(store)).expect("Context creation failed");
    (dir, ctx)
}

fn reopen(dir: &TempDir) -> SessionContext {
    let store = JsonFileStore::new(dir.path().join("store.json"));
    SessionContext::new(Box::new(store)).expect("Context creation failed")
}

#[test]
fn test_fresh_context_is_logged_out() {
    let (_dir, ctx) = setup_context();
    assert!(!ctx.session().is_logged_in());
    assert!(ctx.game().is_active());
}

#[test]
fn test_full_game_records_and_persists_win() {
    let (dir, mut ctx) = setup_context();
    ctx.login("Ann", false).expect("Login failed");

    // X takes the top row.
    for pos in [0, 3, 1, 4] {
        assert_eq!(ctx.play_move(pos), Some(GameStatus::InProgress));
    }
    assert_eq!(ctx.play_move(2), Some(GameStatus::Won(Marker::X)));

    let stats = ctx.session().stats();
    assert_eq!(*stats.matches_played(), 1);
    assert_eq!(*stats.matches_won(), 1);

    // A fresh context sees the persisted result.
    let reopened = reopen(&dir);
    assert_eq!(reopened.session().name(), "Ann");
    assert_eq!(*reopened.session().stats().matches_won(), 1);
}

#[test]
fn test_o_win_recorded_as_loss() {
    let (_dir, mut ctx) = setup_context();
    ctx.login("Ann", false).expect("Login failed");

    // O takes the left column.
    for pos in [1, 0, 2, 3, 4] {
        ctx.play_move(pos).expect("Valid move");
    }
    assert_eq!(ctx.play_move(6), Some(GameStatus::Won(Marker::O)));

    let stats = ctx.session().stats();
    assert_eq!(*stats.matches_played(), 1);
    assert_eq!(*stats.matches_lost(), 1);
    assert_eq!(*stats.matches_won(), 0);
}

#[test]
fn test_invalid_moves_are_silent_no_ops() {
    let (_dir, mut ctx) = setup_context();
    ctx.login("Ann", false).expect("Login failed");

    assert!(ctx.play_move(4).is_some());
    let before = ctx.game().clone();

    // Occupied cell and out-of-range index are both ignored.
    assert_eq!(ctx.play_move(4), None);
    assert_eq!(ctx.play_move(42), None);
    assert_eq!(ctx.game(), &before);
}

#[test]
fn test_restart_resets_game_but_keeps_stats() {
    let (_dir, mut ctx) = setup_context();
    ctx.login("Ann", false).expect("Login failed");
    for pos in [0, 3, 1, 4, 2] {
        ctx.play_move(pos).expect("Valid move");
    }
    assert_eq!(*ctx.session().stats().matches_played(), 1);

    ctx.restart();
    assert!(ctx.game().is_active());
    assert_eq!(ctx.game().current_marker(), Marker::X);
    assert_eq!(*ctx.session().stats().matches_played(), 1);
}

#[test]
fn test_logout_persists_cleared_record() {
    let (dir, mut ctx) = setup_context();
    ctx.login("Ann", false).expect("Login failed");
    ctx.logout();

    let reopened = reopen(&dir);
    assert!(!reopened.session().is_logged_in());
    assert_eq!(*reopened.session().stats().matches_played(), 0);
}

#[test]
fn test_login_persists_immediately() {
    let (dir, mut ctx) = setup_context();
    ctx.login("Ann", true).expect("Login failed");

    let reopened = reopen(&dir);
    assert_eq!(reopened.session().name(), "Ann (Guest)");
}
