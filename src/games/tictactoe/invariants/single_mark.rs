//! Single mark invariant: each step adds exactly one mark, for the right player.

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: snapshot `k` equals snapshot `k - 1` plus one mark.
///
/// The changed square goes from empty to the mark of the player who
/// moves at step `k - 1`. No square is ever overwritten or cleared.
pub struct SingleMarkPerStepInvariant;

impl Invariant<GameState> for SingleMarkPerStepInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let mover = Square::Occupied(Player::for_step(step));
                let mut changed = pair[0]
                    .squares()
                    .iter()
                    .zip(pair[1].squares())
                    .filter(|(before, after)| before != after);

                matches!(
                    (changed.next(), changed.next()),
                    (Some((Square::Empty, after)), None) if *after == mover
                )
            })
    }

    fn description() -> &'static str {
        "Each step adds exactly one mark for the player to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_new_game_holds() {
        assert!(SingleMarkPerStepInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let state = GameState::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        assert_eq!(state.history().len(), 10);
        assert!(SingleMarkPerStepInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let mut state = GameState::new().apply_move(4).unwrap();
        state.history.snapshots[1].set(Position::Center, Square::Occupied(Player::O));
        assert!(!SingleMarkPerStepInvariant::holds(&state));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut state = GameState::replay(&[4, 0]).unwrap();
        // O takes over X's square instead of an empty one.
        state.history.snapshots[2].set(Position::TopLeft, Square::Empty);
        state.history.snapshots[2].set(Position::Center, Square::Occupied(Player::O));
        assert!(!SingleMarkPerStepInvariant::holds(&state));
    }

    #[test]
    fn test_unchanged_step_violates() {
        let mut state = GameState::new().apply_move(4).unwrap();
        state.history.snapshots[1] = state.history.snapshots[0].clone();
        assert!(!SingleMarkPerStepInvariant::holds(&state));
    }
}
