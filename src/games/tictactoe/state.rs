//! The game-state manager: history, current step, moves and time travel.
//!
//! Every operation takes the current state by reference and returns a
//! fresh [`GameState`]. The caller keeps the old value on rejection, so a
//! refused operation is a no-op by construction.

use super::action::{Action, RejectedOperation};
use super::contracts::{Contract, JumpContract, LegalMove};
#[cfg(debug_assertions)]
use super::contracts::MoveContract;
use super::history::History;
use super::rules::calculate_winner;
use super::types::{Board, Player};
use super::view::GameView;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Status line shown above the move list.
///
/// Always derived from the displayed snapshot, never stored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameStatus {
    /// The displayed snapshot has a completed line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Play continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl GameStatus {
    /// Returns the winner, if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Winner(player) => Some(player),
            GameStatus::NextPlayer(_) => None,
        }
    }
}

/// Complete game state: the history and the step being displayed.
///
/// The next player is a function of `current_step` and is not stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) current_step: usize,
}

impl GameState {
    /// Creates a new game: one empty snapshot, step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_step: 0,
        }
    }

    /// Returns the full history, including steps after the current one.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the step being displayed.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the snapshot being displayed.
    pub fn current(&self) -> &Board {
        &self.history.snapshots[self.current_step]
    }

    /// Player to move at the current step (X on even, O on odd).
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Winner of the displayed snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        calculate_winner(self.current())
    }

    /// Derived status for the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Winner(player),
            None => GameStatus::NextPlayer(self.next_player()),
        }
    }

    /// Places the next player's mark at `cell`.
    ///
    /// Any history after the current step is discarded before the new
    /// snapshot is appended, and the new snapshot becomes current.
    ///
    /// # Errors
    ///
    /// - [`RejectedOperation::OutOfRange`] if `cell` is not 0-8
    /// - [`RejectedOperation::GameWon`] if the displayed snapshot has a winner
    /// - [`RejectedOperation::CellOccupied`] if the square is taken
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&self, cell: usize) -> Result<Self, RejectedOperation> {
        let position = LegalMove::check(cell, self)?;

        let player = self.next_player();
        let next = self.current().with_mark(position, player);
        let history = self.history.branch(self.current_step, next);
        let after = Self {
            current_step: history.len() - 1,
            history,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &after)?;

        debug!(%player, %position, step = after.current_step, "Move applied");
        Ok(after)
    }

    /// Displays the snapshot at `step` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`RejectedOperation::InvalidStep`] if `step` is past the end
    /// of the history.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&self, step: usize) -> Result<Self, RejectedOperation> {
        JumpContract::pre(self, &step)?;

        let after = Self {
            history: self.history.clone(),
            current_step: step,
        };

        #[cfg(debug_assertions)]
        JumpContract::post(self, &after)?;

        debug!(step, "Jumped");
        Ok(after)
    }

    /// Applies an [`Action`].
    pub fn apply(&self, action: Action) -> Result<Self, RejectedOperation> {
        match action {
            Action::Place(cell) => self.apply_move(cell),
            Action::Jump(step) => self.jump_to(step),
        }
    }

    /// Plays `cells` in order from a fresh game.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first rejection.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, RejectedOperation> {
        cells
            .iter()
            .try_fold(Self::new(), |state, &cell| state.apply_move(cell))
    }

    /// Builds the presenter snapshot for the current step.
    pub fn view(&self) -> GameView {
        GameView::from(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Position, Square};

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.current_step(), 0);
        assert_eq!(state.history().len(), 1);
        assert!(state.current().is_blank());
        assert_eq!(state.status(), GameStatus::NextPlayer(Player::X));
    }

    #[test]
    fn test_apply_move_places_next_player_mark() {
        let state = GameState::new().apply_move(4).unwrap();
        assert_eq!(state.current_step(), 1);
        assert_eq!(state.current().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(state.next_player(), Player::O);
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let state = GameState::new().apply_move(4).unwrap();
        assert_eq!(
            state.apply_move(4),
            Err(RejectedOperation::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_apply_move_rejects_out_of_range() {
        assert_eq!(
            GameState::new().apply_move(9),
            Err(RejectedOperation::OutOfRange { cell: 9 })
        );
    }

    #[test]
    fn test_won_board_rejects_occupied_cell_as_won() {
        let state = GameState::replay(&[0, 1, 3, 4, 6]).unwrap();
        assert_eq!(state.apply_move(0), Err(RejectedOperation::GameWon(Player::X)));
        assert_eq!(state.apply_move(12), Err(RejectedOperation::OutOfRange { cell: 12 }));
    }

    #[test]
    fn test_won_snapshot_is_frozen() {
        let state = GameState::replay(&[0, 1, 3, 4, 6]).unwrap();
        assert_eq!(state.status(), GameStatus::Winner(Player::X));
        assert_eq!(state.apply_move(8), Err(RejectedOperation::GameWon(Player::X)));
    }

    #[test]
    fn test_jump_keeps_history() {
        let state = GameState::replay(&[0, 1, 2]).unwrap();
        let jumped = state.jump_to(1).unwrap();
        assert_eq!(jumped.current_step(), 1);
        assert_eq!(jumped.history(), state.history());
        assert_eq!(jumped.next_player(), Player::O);
    }

    #[test]
    fn test_jump_rejects_past_end() {
        let state = GameState::replay(&[0, 1]).unwrap();
        assert_eq!(
            state.jump_to(3),
            Err(RejectedOperation::InvalidStep { step: 3, len: 3 })
        );
    }

    #[test]
    fn test_replay_stops_at_first_rejection() {
        assert_eq!(
            GameState::replay(&[0, 0]),
            Err(RejectedOperation::CellOccupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::NextPlayer(Player::O).to_string(), "Next player: O");
        assert_eq!(GameStatus::Winner(Player::X).to_string(), "Winner: X");
    }
}
