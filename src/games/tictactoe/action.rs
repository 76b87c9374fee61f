//! First-class action types for tic-tac-toe.
//!
//! Actions are the two user intents a presenter can forward: clicking a
//! cell and clicking a history link. They carry the index explicitly so
//! the presenter never has to close over mutable state.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A user intent against the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Action {
    /// Place the next player's mark at a raw cell index.
    #[display("place at cell {}", _0)]
    Place(usize),
    /// Travel to a step of the history.
    #[display("jump to step {}", _0)]
    Jump(usize),
}

/// Why an operation was refused.
///
/// Rejections are never fatal: the state the operation was called on is
/// left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RejectedOperation {
    /// The cell index is outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", cell)]
    OutOfRange {
        /// The requested cell index.
        cell: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The displayed snapshot already has a winner.
    #[display("Game is already won by {}", _0)]
    GameWon(Player),

    /// The history step does not exist.
    #[display("Step {} does not exist (history has {} entries)", step, len)]
    InvalidStep {
        /// The requested step.
        step: usize,
        /// Length of the history at the time of the request.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for RejectedOperation {}
