use std::fmt;
use std::str::FromStr;

use super::board::Cell;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Checker {
    X,
    O,
}

impl Checker {
    /// Both checkers, in turn order.
    pub const ALL: [Checker; 2] = [Checker::X, Checker::O];

    /// Get the opponent's checker
    pub fn other(self) -> Checker {
        match self {
            Checker::X => Checker::O,
            Checker::O => Checker::X,
        }
    }

    /// Convert checker to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Checker::X => Cell::X,
            Checker::O => Cell::O,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Checker::X => 'X',
            Checker::O => 'O',
        }
    }
}

impl fmt::Display for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Checker {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Checker::X),
            "O" | "o" => Ok(Checker::O),
            other => Err(ConfigError::UnknownChecker(other.to_string())),
        }
    }
}
