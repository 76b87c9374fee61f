//! Step bounds invariant: the current step indexes the history.

use super::super::GameState;
use super::Invariant;

/// Invariant: `0 <= current_step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_step() < state.history().len()
    }

    fn description() -> &'static str {
        "Current step is inside the history"
    }
}
