//! Application state and key handling for the terminal presenter.

use super::input::{digit_cell, move_cursor};
use crate::config::TuiConfig;
use crate::games::tictactoe::{Action, GameView, Position};
use crate::session::Session;
use crossterm::event::KeyCode;
use tracing::{debug, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Up/Down walk the move list.
    History,
}

impl Focus {
    /// Toggles between the two panels.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
///
/// Game state lives in the [`Session`]; everything else here is
/// presentation (cursor, focus, last message).
#[derive(Debug, Clone)]
pub struct App {
    session: Session,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    show_cell_numbers: bool,
    message: String,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            session: Session::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
            show_cell_numbers: *config.show_cell_numbers(),
            message: String::new(),
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Render snapshot of the current state.
    pub fn view(&self) -> GameView {
        self.session.view()
    }

    /// Board cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted entry of the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Whether empty squares show their 1-9 key.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Last feedback message (empty when there is nothing to say).
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        if let Some(cell) = digit_cell(key) {
            self.forward(Action::Place(cell));
            return Control::Continue;
        }

        match (key, self.focus) {
            (KeyCode::Char('q') | KeyCode::Esc, _) => return Control::Quit,
            (KeyCode::Char('r'), _) => self.restart(),
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.focus = self.focus.toggle();
                self.selected_step = self.session.state().current_step();
            }
            (KeyCode::Home, _) => self.forward(Action::Jump(0)),
            (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => {
                self.forward(Action::Place(self.cursor.to_index()));
            }
            (KeyCode::Enter | KeyCode::Char(' '), Focus::History) => {
                self.forward(Action::Jump(self.selected_step));
            }
            (KeyCode::Up, Focus::History) => {
                self.selected_step = self.selected_step.saturating_sub(1);
            }
            (KeyCode::Down, Focus::History) => {
                let last = self.session.state().history().len() - 1;
                self.selected_step = (self.selected_step + 1).min(last);
            }
            (key, Focus::Board) => self.cursor = move_cursor(self.cursor, key),
            _ => {}
        }
        Control::Continue
    }

    /// Forwards an intent to the session and records the outcome.
    fn forward(&mut self, action: Action) {
        match self.session.try_dispatch(action) {
            Ok(()) => {
                self.selected_step = self.session.state().current_step();
                self.message.clear();
            }
            Err(e) => {
                debug!(error = %e, "Ignoring rejected input");
                self.message = e.to_string();
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        self.session.restart();
        self.selected_step = 0;
        self.message = "Game restarted".to_string();
    }
}
