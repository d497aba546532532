//! Tests for session lifecycle and statistics recording.

use neon_tictactoe::{GameOutcome, GameStatus, Marker, PlayerSession, SessionError};

#[test]
fn test_login_trims_name_and_zeroes_stats() {
    let mut session = PlayerSession::default();
    session.login("  Ann  ", false).expect("Login failed");

    assert!(session.is_logged_in());
    assert_eq!(session.name(), "Ann");
    assert_eq!(*session.stats().matches_played(), 0);
    assert_eq!(*session.stats().matches_won(), 0);
    assert_eq!(*session.stats().matches_lost(), 0);
    assert_eq!(*session.stats().matches_draw(), 0);
}

#[test]
fn test_guest_login_appends_suffix() {
    let mut session = PlayerSession::default();
    session.login("Ann", true).expect("Login failed");
    assert_eq!(session.name(), "Ann (Guest)");
}

#[test]
fn test_empty_name_rejected_without_change() {
    let mut session = PlayerSession::default();
    assert_eq!(session.login("   ", false), Err(SessionError::EmptyName));
    assert!(!session.is_logged_in());

    // An active session survives a failed re-login.
    session.login("Ann", false).expect("Login failed");
    assert_eq!(session.login("", false), Err(SessionError::EmptyName));
    assert_eq!(session.name(), "Ann");
}

#[test]
fn test_relogin_discards_previous_stats() {
    let mut session = PlayerSession::default();
    session.login("Ann", false).expect("Login failed");
    session.record(GameOutcome::Win);
    assert_eq!(*session.stats().matches_played(), 1);

    session.login("Bob", false).expect("Login failed");
    assert_eq!(session.name(), "Bob");
    assert_eq!(*session.stats().matches_played(), 0);
}

#[test]
fn test_record_win_after_login() {
    let mut session = PlayerSession::default();
    session.login("Ann", false).expect("Login failed");
    session.record(GameOutcome::Win);

    assert_eq!(*session.stats().matches_played(), 1);
    assert_eq!(*session.stats().matches_won(), 1);
    assert_eq!(*session.stats().matches_lost(), 0);
    assert_eq!(*session.stats().matches_draw(), 0);
}

#[test]
fn test_record_increments_exactly_one_bucket() {
    let mut session = PlayerSession::default();
    session.login("Ann", false).expect("Login failed");

    session.record(GameOutcome::Win);
    session.record(GameOutcome::Loss);
    session.record(GameOutcome::Loss);
    session.record(GameOutcome::Draw);

    let stats = session.stats();
    assert_eq!(*stats.matches_played(), 4);
    assert_eq!(*stats.matches_won(), 1);
    assert_eq!(*stats.matches_lost(), 2);
    assert_eq!(*stats.matches_draw(), 1);
}

#[test]
fn test_logout_clears_identity_and_stats() {
    let mut session = PlayerSession::default();
    session.login("Ann", false).expect("Login failed");
    session.record(GameOutcome::Win);

    session.logout();
    assert!(!session.is_logged_in());
    assert_eq!(session.name(), "");
    assert_eq!(*session.stats().matches_played(), 0);
}

#[test]
fn test_outcome_mapping_from_game_status() {
    // X wins count for the tracked user, O wins against them.
    assert_eq!(
        GameOutcome::from_status(GameStatus::Won(Marker::X)),
        Some(GameOutcome::Win)
    );
    assert_eq!(
        GameOutcome::from_status(GameStatus::Won(Marker::O)),
        Some(GameOutcome::Loss)
    );
    assert_eq!(
        GameOutcome::from_status(GameStatus::Draw),
        Some(GameOutcome::Draw)
    );
    assert_eq!(GameOutcome::from_status(GameStatus::InProgress), None);
}

#[test]
fn test_win_rate() {
    let mut session = PlayerSession::default();
    session.login("Ann", false).expect("Login failed");
    assert_eq!(session.stats().win_rate(), 0.0);

    session.record(GameOutcome::Win);
    session.record(GameOutcome::Loss);
    assert_eq!(session.stats().win_rate(), 50.0);
}

#[test]
fn test_avatar_initial_is_uppercased() {
    let mut session = PlayerSession::default();
    session.login("ann", false).expect("Login failed");
    assert_eq!(session.avatar_initial(), Some('A'));
}
