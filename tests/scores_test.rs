//! Score submission end to end through the JSON file store

use tui_match4::core::{Board, GameState};
use tui_match4::scores::{
    submit_score, top_scores, JsonFileStore, ScoreError, ScoreStore, TOP_SCORES_LIMIT,
};
use tui_match4::types::BlockColor::*;

fn finished_game() -> GameState {
    let col: Vec<_> = (0..9)
        .map(|i| Some(if i % 2 == 0 { Green } else { Yellow }))
        .collect();
    let mut state = GameState::with_board(Board::from_columns(&[&col]), 3);
    state.advance_row();
    state
}

#[test]
fn test_submit_after_game_over_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");
    let state = finished_game();
    assert!(state.game_over());

    let mut store = JsonFileStore::new(&path);
    submit_score(&mut store, state.game_over(), state.score(), "mia").unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed[0]["playerName"], "mia");
    assert_eq!(parsed[0]["points"], 0);
}

#[test]
fn test_submit_during_play_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("scores.json"));
    let state = GameState::new(5);

    let err = submit_score(&mut store, state.game_over(), state.score(), "mia").unwrap_err();
    assert!(matches!(err, ScoreError::GameInProgress));
    assert_eq!(err.to_string(), "The game is still going!");
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_blank_name_message() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("scores.json"));

    let err = submit_score(&mut store, true, 800, "  ").unwrap_err();
    assert_eq!(err.to_string(), "Please enter a valid player name!");
}

#[test]
fn test_high_score_table_keeps_top_fifteen() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("scores.json"));
    for i in 0..20u32 {
        submit_score(&mut store, true, i * 100, &format!("p{}", i)).unwrap();
    }

    let top = top_scores(store.load().unwrap(), TOP_SCORES_LIMIT);
    assert_eq!(top.len(), 15);
    assert_eq!(top[0].points, 1900);
    assert_eq!(top[14].points, 500);
}
