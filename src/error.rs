use std::path::PathBuf;

use crate::game::Checker;

/// A move the board or game refused. The board is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {col} is out of range (board has {width} columns)")]
    OutOfRange { col: usize, width: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} is empty")]
    ColumnEmpty(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors a move-selection strategy can report.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("no legal move available: the board is full")]
    NoLegalMove,

    #[error("input closed before a valid column was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while running a match.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("illegal move: {0}")]
    Move(#[from] MoveError),

    #[error("strategy failed: {0}")]
    Strategy(#[from] StrategyError),

    #[error("both players use checker {0}; need one X player and one O player")]
    DuplicateChecker(Checker),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("unknown checker '{0}' (expected X or O)")]
    UnknownChecker(String),

    #[error("unknown tiebreak '{0}' (expected LEFT, RIGHT, or RANDOM)")]
    UnknownTieBreak(String),

    #[error("unknown player kind '{0}' (expected human, random, or lookahead)")]
    UnknownStrategy(String),
}
