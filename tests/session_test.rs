//! Tests for the session host and the presenter-facing view.

use strictly_tictactoe::{GameStatus, Session, TicTacToePlayer as Player};

#[test]
fn test_clicks_drive_the_game() {
    let mut session = Session::new();
    for cell in [0, 1, 3, 4] {
        assert!(session.click_cell(cell));
    }
    assert!(session.click_cell(6));
    assert_eq!(*session.view().status(), GameStatus::Winner(Player::X));

    // Frozen until the user travels back.
    assert!(!session.click_cell(8));
    assert!(session.click_history(2));
    assert!(session.click_cell(8));
    assert_eq!(session.state().history().len(), 4);
}

#[test]
fn test_history_links_follow_history() {
    let mut session = Session::new();
    session.click_cell(4);
    session.click_cell(0);

    let view = session.view();
    let labels: Vec<_> = view.moves().iter().map(|m| m.label().as_str()).collect();
    assert_eq!(labels, ["Go to game start", "Go to move #1", "Go to move #2"]);
    assert_eq!(*view.current_step(), 2);
}

#[test]
fn test_view_serializes_for_presenters() {
    let mut session = Session::new();
    session.click_cell(0);

    let json = serde_json::to_value(session.view()).unwrap();
    assert_eq!(json["status_line"], "Next player: O");
    assert_eq!(json["current_step"], 1);
    assert_eq!(json["squares"][0], serde_json::json!({ "Occupied": "X" }));
    assert_eq!(json["squares"][1], "Empty");
    assert_eq!(json["moves"].as_array().map(Vec::len), Some(2));
}
