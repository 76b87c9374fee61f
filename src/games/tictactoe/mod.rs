mod action;
mod contracts;
mod history;
mod invariants;
mod position;
mod rules;
mod state;
mod types;
mod view;

pub use action::{Action, RejectedOperation};
pub use contracts::{
    CellInRange, CellIsEmpty, Contract, GameNotWon, JumpContract, LegalMove, MoveContract,
    StepInRange,
};
pub use history::History;
pub use invariants::{
    EmptyStartInvariant, Invariant, InvariantSet, InvariantViolation, SingleMarkPerStepInvariant,
    StepInBoundsInvariant, TimeTravelInvariants,
};
pub use position::Position;
pub use rules::{LINES, calculate_winner, winning_line};
pub use state::{GameState, GameStatus};
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveLink};
