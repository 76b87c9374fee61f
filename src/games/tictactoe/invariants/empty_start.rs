//! Empty start invariant: the first snapshot is the empty board.

use super::super::GameState;
use super::Invariant;

/// Invariant: `history[0]` is the all-empty board.
///
/// Branching never touches entry 0, so this holds for every state built
/// through `apply_move` and `jump_to`.
pub struct EmptyStartInvariant;

impl Invariant<GameState> for EmptyStartInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().get(0).is_some_and(|board| board.is_blank())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position, Square};

    #[test]
    fn test_new_game_holds() {
        assert!(EmptyStartInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_after_branching_from_start() {
        let state = GameState::replay(&[4, 0])
            .and_then(|s| s.jump_to(0))
            .and_then(|s| s.apply_move(8))
            .unwrap();
        assert!(EmptyStartInvariant::holds(&state));
    }

    #[test]
    fn test_marked_start_violates() {
        let mut state = GameState::new();
        state.history.snapshots[0].set(Position::Center, Square::Occupied(Player::X));
        assert!(!EmptyStartInvariant::holds(&state));
    }
}
