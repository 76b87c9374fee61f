//! Strictly Tic-Tac-Toe - tic-tac-toe with time travel.
//!
//! The game state is an immutable value: a history of board snapshots and
//! the step currently displayed. Moves and jumps return new values and
//! never touch the old one.
//!
//! # Architecture
//!
//! - **Games**: the game-state manager, rules, contracts and invariants
//! - **Session**: the host that owns the current state and routes clicks
//! - **TUI**: a ratatui presenter over [`GameView`] snapshots
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameState, GameStatus, TicTacToePlayer as Player};
//!
//! let state = GameState::replay(&[0, 1, 3, 4, 6]).unwrap();
//! assert_eq!(state.status(), GameStatus::Winner(Player::X));
//!
//! // Travel back two moves and branch.
//! let state = state.jump_to(3).unwrap().apply_move(8).unwrap();
//! assert_eq!(state.history().len(), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, TuiConfig};

// Crate-level exports - Session management
pub use session::Session;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, Board, CellInRange, CellIsEmpty, Contract, EmptyStartInvariant, GameNotWon, GameState,
    GameStatus, GameView, History, Invariant, InvariantSet, InvariantViolation, JumpContract,
    LINES, LegalMove, MoveContract, MoveLink, Player as TicTacToePlayer, Position,
    RejectedOperation, SingleMarkPerStepInvariant, Square, StepInBoundsInvariant, StepInRange,
    TimeTravelInvariants, calculate_winner, winning_line,
};
