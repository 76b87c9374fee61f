//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::RejectedOperation;
use super::invariants::{InvariantSet, TimeTravelInvariants};
use super::state::GameState;
use super::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), RejectedOperation>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), RejectedOperation>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell index names a square on the board.
pub struct CellInRange;

impl CellInRange {
    /// Resolves `cell` to a position or rejects it.
    #[instrument]
    pub fn check(cell: usize) -> Result<Position, RejectedOperation> {
        Position::from_index(cell).ok_or(RejectedOperation::OutOfRange { cell })
    }
}

/// Precondition: the displayed snapshot has no winner.
pub struct GameNotWon;

impl GameNotWon {
    /// Rejects moves on a won snapshot.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), RejectedOperation> {
        match state.winner() {
            Some(player) => Err(RejectedOperation::GameWon(player)),
            None => Ok(()),
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto an occupied square.
    #[instrument(skip(state))]
    pub fn check(position: Position, state: &GameState) -> Result<(), RejectedOperation> {
        if state.current().is_empty(position) {
            Ok(())
        } else {
            Err(RejectedOperation::CellOccupied(position))
        }
    }
}

/// Composite precondition for placing a mark.
///
/// Checked in order: range, winner, occupancy.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(cell: usize, state: &GameState) -> Result<Position, RejectedOperation> {
        let position = CellInRange::check(cell)?;
        GameNotWon::check(state)?;
        CellIsEmpty::check(position, state)?;
        Ok(position)
    }
}

/// Precondition: the step exists in the history.
pub struct StepInRange;

impl StepInRange {
    /// Rejects steps past the end of the history.
    #[instrument(skip(state))]
    pub fn check(step: usize, state: &GameState) -> Result<(), RejectedOperation> {
        let len = state.history().len();
        if step < len {
            Ok(())
        } else {
            Err(RejectedOperation::InvalidStep { step, len })
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Contracts (Pre + Post)
// ─────────────────────────────────────────────────────────────

fn check_invariants(after: &GameState) -> Result<(), RejectedOperation> {
    TimeTravelInvariants::check_all(after).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Postcondition failed");
        RejectedOperation::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

/// Contract for placing a mark.
///
/// Postconditions:
/// - History up to the old step is kept, everything after it is gone
/// - Exactly one new snapshot was appended and is current
/// - All [`TimeTravelInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    fn pre(state: &GameState, cell: &usize) -> Result<(), RejectedOperation> {
        LegalMove::check(*cell, state).map(|_| ())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), RejectedOperation> {
        let kept = before.current_step() + 1;
        let prefix_kept = after.history().len() == kept + 1
            && after.history().snapshots()[..kept] == before.history().snapshots()[..kept];
        if !prefix_kept {
            warn!(kept, len = after.history().len(), "History prefix changed");
            return Err(RejectedOperation::InvariantViolation(
                "Postcondition failed: history before the move was altered".to_string(),
            ));
        }
        if after.current_step() != kept {
            return Err(RejectedOperation::InvariantViolation(
                "Postcondition failed: new snapshot is not current".to_string(),
            ));
        }
        check_invariants(after)
    }
}

/// Contract for time travel.
///
/// Postconditions:
/// - History is unchanged
/// - All [`TimeTravelInvariants`] hold
pub struct JumpContract;

impl Contract<GameState, usize> for JumpContract {
    fn pre(state: &GameState, step: &usize) -> Result<(), RejectedOperation> {
        StepInRange::check(*step, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), RejectedOperation> {
        if before.history() != after.history() {
            warn!("History changed during jump");
            return Err(RejectedOperation::InvariantViolation(
                "Postcondition failed: jump altered the history".to_string(),
            ));
        }
        check_invariants(after)
    }
}
