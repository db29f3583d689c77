//! # Connect Four
//!
//! Connect Four on a board of any size, with human, random, and lookahead
//! computer players. Play happens in the terminal, either as a plain text
//! game or through a Ratatui UI.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, checkers, game state
//! - [`ai`]: Strategy trait, human/random/lookahead strategies, players
//! - [`driver`]: Turn driver that runs a match between two players
//! - [`ui`]: Terminal UI for interactive play
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod driver;
pub mod error;
pub mod game;
pub mod ui;
