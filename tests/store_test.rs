//! Tests for the JSON file store.

use neon_tictactoe::{JsonFileStore, PlayerStats, STORAGE_KEY, SessionRecord, Store, StoreError};
use tempfile::TempDir;

/// Returns a store backed by a file inside a fresh temp directory (the
/// directory handle must stay in scope to keep the file alive).
fn setup_test_store() -> (TempDir, JsonFileStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonFileStore::new(dir.path().join("store.json"));
    (dir, store)
}

fn record_with_games(name: &str) -> SessionRecord {
    let mut stats = PlayerStats::default();
    stats.record(neon_tictactoe::GameOutcome::Win);
    stats.record(neon_tictactoe::GameOutcome::Draw);
    SessionRecord::new(name.to_string(), stats)
}

#[test]
fn test_load_missing_file_yields_default_record() {
    let (_dir, store) = setup_test_store();
    let record = store.load().expect("Load failed");
    assert_eq!(record, SessionRecord::default());
    assert_eq!(record.name(), "");
    assert_eq!(*record.stats().matches_played(), 0);
}

#[test]
fn test_save_then_load_roundtrip() {
    let (_dir, store) = setup_test_store();
    let record = record_with_games("Ann");

    store.save(&record).expect("Save failed");
    let loaded = store.load().expect("Load failed");
    assert_eq!(loaded, record);
}

#[test]
fn test_save_is_idempotent() {
    let (_dir, store) = setup_test_store();
    let record = record_with_games("Ann");

    store.save(&record).expect("First save failed");
    let first = std::fs::read_to_string(store.path()).expect("Read failed");

    store.save(&record).expect("Second save failed");
    let second = std::fs::read_to_string(store.path()).expect("Read failed");

    assert_eq!(first, second, "Repeated save must persist identical bytes");
}

#[test]
fn test_save_replaces_whole_record() {
    let (_dir, store) = setup_test_store();
    store.save(&record_with_games("Ann")).expect("Save failed");
    store
        .save(&SessionRecord::new("Bob".to_string(), PlayerStats::default()))
        .expect("Save failed");

    let loaded = store.load().expect("Load failed");
    assert_eq!(loaded.name(), "Bob");
    assert_eq!(*loaded.stats().matches_played(), 0);
}

#[test]
fn test_file_uses_fixed_storage_key_and_field_names() {
    let (_dir, store) = setup_test_store();
    store.save(&record_with_games("Ann")).expect("Save failed");

    let content = std::fs::read_to_string(store.path()).expect("Read failed");
    let value: serde_json::Value = serde_json::from_str(&content).expect("Parse failed");

    let slot = value.get(STORAGE_KEY).expect("Storage key missing");
    assert_eq!(slot["name"], "Ann");
    assert_eq!(slot["stats"]["matchesPlayed"], 2);
    assert_eq!(slot["stats"]["matchesWon"], 1);
    assert_eq!(slot["stats"]["matchesDraw"], 1);
}

#[test]
fn test_load_tolerates_missing_slot_key() {
    let (_dir, store) = setup_test_store();
    std::fs::write(store.path(), "{}").expect("Write failed");

    let record = store.load().expect("Load failed");
    assert_eq!(record, SessionRecord::default());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let (_dir, store) = setup_test_store();
    std::fs::write(store.path(), "not json").expect("Write failed");
    assert!(store.load().is_err());
}

#[test]
fn test_store_error_display_includes_location() {
    let err = StoreError::new("slot unavailable");
    let text = err.to_string();
    assert!(text.contains("store error: slot unavailable"));
    assert!(text.contains("store_test.rs"));
}
