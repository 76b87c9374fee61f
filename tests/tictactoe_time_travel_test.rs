//! Scenario tests for history, turn order and time travel.

use strictly_tictactoe::{
    GameState, GameStatus, Position, RejectedOperation, Square, TicTacToePlayer as Player,
    calculate_winner,
};

#[test]
fn test_column_win_scenario() {
    // X: 0, 3, 6 / O: 1, 4
    let state = GameState::replay(&[0, 1, 3, 4, 6]).unwrap();

    assert_eq!(calculate_winner(state.current()), Some(Player::X));
    assert_eq!(state.status(), GameStatus::Winner(Player::X));
    assert_eq!(state.status().to_string(), "Winner: X");
}

#[test]
fn test_diagonal_is_not_won_by_mixed_marks() {
    // X: 0, 8, 2 / O: 4, 1 - line [0,4,8] has O in the middle.
    let state = GameState::replay(&[0, 4, 8, 1, 2]).unwrap();
    assert_eq!(state.winner(), None);
    assert_eq!(state.status(), GameStatus::NextPlayer(Player::O));
}

#[test]
fn test_jump_to_start_resets_turn_and_board() {
    let state = GameState::replay(&[0, 1, 2, 4]).unwrap();
    let jumped = state.jump_to(0).unwrap();

    assert_eq!(jumped.next_player(), Player::X);
    assert_eq!(jumped.status().to_string(), "Next player: X");
    assert!(jumped.current().is_blank());
    assert_eq!(jumped.history().len(), state.history().len());
}

#[test]
fn test_out_of_range_move_is_rejected() {
    let state = GameState::replay(&[4]).unwrap();
    assert_eq!(
        state.apply_move(9),
        Err(RejectedOperation::OutOfRange { cell: 9 })
    );
    // The original value is untouched either way.
    assert_eq!(state.current_step(), 1);
}

#[test]
fn test_move_after_jump_truncates_future() {
    let state = GameState::replay(&[0, 1, 2, 3, 4]).unwrap();
    let k = 2;
    let branched = state.jump_to(k).unwrap().apply_move(8).unwrap();

    assert_eq!(branched.history().len(), k + 2);
    assert_eq!(
        branched.history().snapshots()[..=k],
        state.history().snapshots()[..=k]
    );
    assert_eq!(branched.current_step(), k + 1);
    // Step 2 is even, so X moves.
    assert_eq!(
        branched.current().get(Position::BottomRight),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_jump_then_jump_forward_keeps_future() {
    let state = GameState::replay(&[0, 1, 2]).unwrap();
    let back = state.jump_to(1).unwrap();
    let forward = back.jump_to(3).unwrap();
    assert_eq!(forward, state);
}

#[test]
fn test_travelling_before_a_win_unfreezes_the_game() {
    let won = GameState::replay(&[0, 1, 3, 4, 6]).unwrap();
    assert!(won.apply_move(8).is_err());

    let before_win = won.jump_to(4).unwrap();
    let next = before_win.apply_move(8).unwrap();
    assert_eq!(next.winner(), None);
    assert_eq!(next.history().len(), 6);
}
