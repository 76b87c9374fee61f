//! Presenter-facing snapshot of a game state.
//!
//! A [`GameView`] is everything a presenter needs to draw one frame: the
//! nine squares of the displayed step, the status line and one link per
//! history entry. Presenters never look at [`GameState`] directly.

use super::rules::winning_line;
use super::state::{GameState, GameStatus};
use super::types::grid_text;
use super::{Position, Square};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use std::fmt;

/// A "go to" link for one history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct MoveLink {
    /// History step this link jumps to.
    step: usize,
    /// Link text.
    label: String,
    /// Whether this is the step being displayed.
    current: bool,
}

impl MoveLink {
    /// Text for the link to `step`.
    pub fn label_for(step: usize) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        }
    }
}

/// Render snapshot for a presenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Squares of the displayed snapshot, row-major.
    squares: [Square; 9],
    /// Derived status.
    status: GameStatus,
    /// Status rendered as text ("Winner: X" / "Next player: O").
    status_line: String,
    /// One link per history entry, oldest first.
    moves: Vec<MoveLink>,
    /// Step being displayed.
    current_step: usize,
    /// Completed line on the displayed snapshot, if any.
    winning_line: Option<[Position; 3]>,
}

impl From<&GameState> for GameView {
    fn from(state: &GameState) -> Self {
        let status = state.status();
        let moves = (0..state.history().len())
            .map(|step| MoveLink::new(step, MoveLink::label_for(step), step == state.current_step()))
            .collect();

        Self {
            squares: *state.current().squares(),
            status,
            status_line: status.to_string(),
            moves,
            current_step: state.current_step(),
            winning_line: winning_line(state.current()),
        }
    }
}

impl fmt::Display for GameView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", grid_text(&self.squares))?;
        writeln!(f)?;
        writeln!(f, "{}", self.status_line)?;
        for link in &self.moves {
            let marker = if link.current { '>' } else { ' ' };
            writeln!(f, "{} {}. {}", marker, link.step + 1, link.label)?;
        }
        Ok(())
    }
}
