//! Integration tests for the JSON snapshot: round trip and field defaults.

use pong_league_web::{record_match, LeagueStore, MatchSubmission};
use std::fs;
use std::path::PathBuf;

fn temp_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pong-league-{}-{}.json", tag, uuid::Uuid::new_v4()))
}

fn submission(p1: &str, p2: &str, s1: u32, s2: u32) -> MatchSubmission {
    MatchSubmission {
        player1: p1.to_string(),
        player2: p2.to_string(),
        score1: s1,
        score2: s2,
        match_date: "2024-01-01".to_string(),
    }
}

#[test]
fn save_then_load_preserves_both_collections() {
    let path = temp_path("roundtrip");
    let store = LeagueStore::new();
    record_match(&store, &submission("Alice", "Bob", 21, 15)).unwrap();
    record_match(&store, &submission("Bob", "Alice", 21, 18)).unwrap();
    store.save(&path).unwrap();

    let reloaded = LeagueStore::load(&path).unwrap();
    assert_eq!(reloaded.list_players().unwrap(), store.list_players().unwrap());
    assert_eq!(reloaded.list_matches().unwrap(), store.list_matches().unwrap());

    // The name index must be rebuilt, not just the documents.
    let alice = reloaded.get_player_by_name("Alice").unwrap().unwrap();
    assert_eq!((alice.wins, alice.losses), (1, 1));

    fs::remove_file(&path).ok();
}

#[test]
fn loading_a_missing_file_starts_empty() {
    let path = temp_path("missing");
    let store = LeagueStore::load(&path).unwrap();
    assert!(store.list_players().unwrap().is_empty());
    assert!(store.list_matches().unwrap().is_empty());
}

#[test]
fn missing_numeric_fields_default_to_zero() {
    // A hand-edited or older snapshot may omit counters; they read as 0.
    let path = temp_path("defaults");
    fs::write(
        &path,
        r#"{
            "players": [
                { "id": "7f2c1cde-6b8a-4f24-9c56-0a2f2f9f2a11", "name": "Old Timer" }
            ],
            "matches": []
        }"#,
    )
    .unwrap();

    let store = LeagueStore::load(&path).unwrap();
    let p = store.get_player_by_name("Old Timer").unwrap().unwrap();
    assert_eq!((p.wins, p.losses), (0, 0));
    assert_eq!((p.points_scored, p.points_against), (0, 0));
    assert_eq!(p.win_pct(), 0.0);

    fs::remove_file(&path).ok();
}

#[test]
fn loading_a_malformed_snapshot_is_an_error() {
    let path = temp_path("malformed");
    fs::write(&path, "not json").unwrap();
    assert!(LeagueStore::load(&path).is_err());
    fs::remove_file(&path).ok();
}
