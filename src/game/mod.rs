//! Core Connect Four game logic: board representation, checkers, and the
//! game state that tracks whose turn it is and how the game ended.

mod board;
mod checker;
mod state;

pub use board::{Board, Cell, COLS, ROWS, WIN_LENGTH};
pub use checker::Checker;
pub use state::{GameOutcome, GameState};
