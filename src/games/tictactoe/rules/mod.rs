//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. They know nothing about
//! history or whose turn it is, so any snapshot in a history can be
//! judged on its own.

pub mod win;

pub use win::{LINES, calculate_winner, winning_line};
