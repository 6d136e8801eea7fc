//! End-to-end ingestion tests over a realistic multi-game server log.
//!
//! The fixture covers both match boundaries (explicit `ShutdownGame:`
//! lines and dashed separators), world kills, repeated separators, a
//! leading separator before any init, and the usual noise of untracked
//! events (connects, items, chat).

#![allow(clippy::unwrap_used)]

use std::path::Path;

use fraglog_parser::LogParser;
use fraglog_store::{GameRepository, MemoryGameRepository};
use fraglog_types::Game;

fn ingest_fixture() -> (fraglog_parser::ParseReport, Vec<Game>) {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("games.log");

    let parser = LogParser::new();
    let mut repo = MemoryGameRepository::new();
    let report = parser.parse_file(&path, &mut repo).unwrap();
    (report, repo.games())
}

#[test]
fn fixture_produces_two_games() {
    let (report, games) = ingest_fixture();

    assert_eq!(games.len(), 2);
    assert_eq!(report.lines_read, 34);
    assert_eq!(report.events_handled, 16);
    assert_eq!(report.lines_skipped, 18);
    assert_eq!(report.lines_failed, 0);
}

#[test]
fn first_game_aggregates_match_the_log() {
    let (_, games) = ingest_fixture();
    let game = games.first().unwrap();

    assert_eq!(game.total_kills, 4);
    assert!(game.is_shut_down);

    // Roster in order of first appearance; the world never rostered.
    let names: Vec<&str> = game.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Dono da Bola", "Isgalamido"]);

    // Dono: two rocket kills, one world death (2 - 1 = 1).
    assert_eq!(game.get_player("Dono da Bola").map(|p| p.kills), Some(1));
    assert_eq!(game.get_player("Isgalamido").map(|p| p.kills), Some(1));
}

#[test]
fn second_game_aggregates_match_the_log() {
    let (_, games) = ingest_fixture();
    let game = games.get(1).unwrap();

    assert_eq!(game.total_kills, 4);
    assert!(game.is_shut_down);

    let names: Vec<&str> = game.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Oootsimo", "Assasinu Credi"]);

    // Oootsimo: two kills, one falling death (2 - 1 = 1).
    assert_eq!(game.get_player("Oootsimo").map(|p| p.kills), Some(1));
    assert_eq!(game.get_player("Assasinu Credi").map(|p| p.kills), Some(1));
}

#[test]
fn games_are_returned_in_log_order() {
    let (_, games) = ingest_fixture();
    let first = games.first().unwrap();
    let second = games.get(1).unwrap();
    assert!(first.uid <= second.uid);
    assert!(first.created_at <= second.created_at);
}

#[test]
fn missing_file_is_the_only_fatal_condition() {
    let parser = LogParser::new();
    let mut repo = MemoryGameRepository::new();
    let missing = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/no-such.log");

    let result = parser.parse_file(&missing, &mut repo);
    assert!(matches!(result, Err(fraglog_parser::ParserError::Io { .. })));
    assert!(repo.is_empty());
}
