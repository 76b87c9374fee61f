//! Session: the host that owns the current game state.
//!
//! Presenters hold a [`Session`] and forward clicks into it. Each click
//! either replaces the held [`GameState`] with a new value or leaves it
//! alone, and reports which happened as a plain `bool`.

use crate::games::tictactoe::{Action, GameState, GameView, RejectedOperation};
use tracing::{debug, info, instrument, warn};

/// One play session of a single game.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: GameState,
}

impl Session {
    /// Creates a session at game start.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self {
            state: GameState::new(),
        }
    }

    /// Creates a session holding an existing state.
    pub fn with_state(state: GameState) -> Self {
        Self { state }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Builds the render snapshot for the current state.
    pub fn view(&self) -> GameView {
        self.state.view()
    }

    /// Applies `action`, returning whether it was accepted.
    ///
    /// Rejections are logged and otherwise ignored; the held state is
    /// only replaced on success.
    pub fn dispatch(&mut self, action: Action) -> bool {
        self.try_dispatch(action).is_ok()
    }

    /// Applies `action`, returning the rejection if there was one.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectedOperation`] from the game state; the held
    /// state is unchanged in that case.
    #[instrument(skip(self), fields(step = self.state.current_step()))]
    pub fn try_dispatch(&mut self, action: Action) -> Result<(), RejectedOperation> {
        match self.state.apply(action) {
            Ok(next) => {
                debug!(%action, step = next.current_step(), status = %next.status(), "Action accepted");
                self.state = next;
                Ok(())
            }
            Err(e) => {
                warn!(%action, error = %e, "Action rejected");
                Err(e)
            }
        }
    }

    /// Handles a click on cell `index` (0-8).
    pub fn click_cell(&mut self, index: usize) -> bool {
        self.dispatch(Action::Place(index))
    }

    /// Handles a click on the history link for `step`.
    pub fn click_history(&mut self, step: usize) -> bool {
        self.dispatch(Action::Jump(step))
    }

    /// Replays clicks against a fresh session, then optionally travels.
    ///
    /// Unlike [`GameState::replay`] this keeps going past rejected clicks,
    /// the same way an interactive presenter ignores a bad click. An
    /// unknown `jump` step is ignored too.
    #[instrument(skip(cells), fields(cells = cells.len()))]
    pub fn from_clicks(cells: &[usize], jump: Option<usize>) -> Self {
        let mut session = Self::new();
        let accepted = cells.iter().filter(|&&cell| session.click_cell(cell)).count();
        info!(accepted, rejected = cells.len() - accepted, "Clicks replayed");

        if let Some(step) = jump
            && !session.click_history(step)
        {
            warn!(step, "Jump ignored");
        }
        session
    }

    /// Throws the whole history away and starts over.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(moves = self.state.history().len() - 1, "Restarting game");
        self.state = GameState::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_cell_reports_acceptance() {
        let mut session = Session::new();
        assert!(session.click_cell(4));
        assert!(!session.click_cell(4));
        assert_eq!(session.state().current_step(), 1);
    }

    #[test]
    fn test_rejected_click_keeps_state() {
        let mut session = Session::new();
        session.click_cell(0);
        let before = session.state().clone();

        assert!(!session.click_cell(9));
        assert!(!session.click_history(5));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_with_state_resumes_game() {
        let state = GameState::replay(&[0, 4]).unwrap();
        let mut session = Session::with_state(state.clone());
        assert_eq!(session.state(), &state);
        assert!(session.click_history(0));
        assert_eq!(session.state().history(), state.history());
    }

    #[test]
    fn test_from_clicks_skips_rejections() {
        let session = Session::from_clicks(&[0, 0, 9, 4], Some(9));
        let view = session.view();
        assert_eq!(*view.current_step(), 2);
        assert_eq!(view.status_line(), "Next player: X");
        assert_eq!(view.moves().len(), 3);
    }

    #[test]
    fn test_from_clicks_travels() {
        let session = Session::from_clicks(&[0, 4, 8], Some(1));
        assert_eq!(session.state().current_step(), 1);
        assert_eq!(session.state().history().len(), 4);
    }

    #[test]
    fn test_restart() {
        let mut session = Session::new();
        session.click_cell(0);
        session.click_cell(1);
        session.restart();
        assert_eq!(session.state(), &GameState::new());
    }
}
