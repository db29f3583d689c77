//! Fixed-depth lookahead scoring.
//!
//! Every column gets one of four scores:
//!
//! | score | meaning                                              |
//! |-------|------------------------------------------------------|
//! | `-1`  | column is full or out of range                       |
//! | `0`   | the opponent has an immediate winning reply          |
//! | `50`  | nothing decisive found within the lookahead depth    |
//! | `100` | dropping here wins immediately                       |
//!
//! The search does not prune and does not distinguish "the opponent can
//! force a loss for us deeper down" from the neutral case: an opponent score
//! of `0` is treated exactly like `50`.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::strategy::Strategy;
use crate::error::{ConfigError, StrategyError};
use crate::game::{Board, Checker};

pub const ILLEGAL: i32 = -1;
pub const UNSAFE: i32 = 0;
pub const NEUTRAL: i32 = 50;
pub const WINNING: i32 = 100;

/// Rule for picking one column among several sharing the best score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum TieBreak {
    /// Lowest column index.
    #[serde(rename = "left", alias = "first", alias = "LEFT", alias = "FIRST")]
    First,
    /// Highest column index.
    #[default]
    #[serde(rename = "right", alias = "last", alias = "RIGHT", alias = "LAST")]
    Last,
    /// Uniformly random among the tied columns.
    #[serde(rename = "random", alias = "RANDOM")]
    Random,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TieBreak::First => "LEFT",
            TieBreak::Last => "RIGHT",
            TieBreak::Random => "RANDOM",
        };
        f.write_str(label)
    }
}

impl FromStr for TieBreak {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "first" => Ok(TieBreak::First),
            "right" | "last" => Ok(TieBreak::Last),
            "random" => Ok(TieBreak::Random),
            _ => Err(ConfigError::UnknownTieBreak(s.trim().to_string())),
        }
    }
}

/// Score every column of `board` for `checker`, looking `depth` replies ahead.
///
/// The board is only read; each candidate move is tried on a copy.
pub fn scores_for(board: &Board, checker: Checker, depth: usize) -> Vec<i32> {
    (0..board.width())
        .map(|col| score_column(board, checker, col, depth))
        .collect()
}

fn score_column(board: &Board, checker: Checker, col: usize, depth: usize) -> i32 {
    let mut next = board.clone();
    if next.drop(checker, col).is_err() {
        return ILLEGAL;
    }

    if next.is_winning_for(checker) {
        return WINNING;
    }
    if depth == 0 {
        return NEUTRAL;
    }

    let replies = scores_for(&next, checker.other(), depth - 1);
    if replies.contains(&WINNING) {
        UNSAFE
    } else {
        NEUTRAL
    }
}

/// Pick the column to play from a score vector, or `None` if `scores` is empty.
///
/// `Random` only consumes randomness when there is more than one candidate.
pub fn max_score_column<R: Rng + ?Sized>(
    scores: &[i32],
    tiebreak: TieBreak,
    rng: &mut R,
) -> Option<usize> {
    let best = *scores.iter().max()?;
    let candidates: Vec<usize> = scores
        .iter()
        .enumerate()
        .filter(|&(_, &score)| score == best)
        .map(|(col, _)| col)
        .collect();

    match tiebreak {
        TieBreak::First => candidates.first().copied(),
        TieBreak::Last => candidates.last().copied(),
        TieBreak::Random if candidates.len() == 1 => Some(candidates[0]),
        TieBreak::Random => Some(candidates[rng.random_range(0..candidates.len())]),
    }
}

/// Computer player that scores each column with [`scores_for`] and breaks
/// ties with a fixed policy.
pub struct LookaheadStrategy {
    tiebreak: TieBreak,
    depth: usize,
    rng: StdRng,
}

impl LookaheadStrategy {
    pub fn new(tiebreak: TieBreak, depth: usize) -> Self {
        LookaheadStrategy {
            tiebreak,
            depth,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(tiebreak: TieBreak, depth: usize, seed: u64) -> Self {
        LookaheadStrategy {
            tiebreak,
            depth,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn tiebreak(&self) -> TieBreak {
        self.tiebreak
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Strategy for LookaheadStrategy {
    fn choose_move(&mut self, board: &Board, checker: Checker) -> Result<usize, StrategyError> {
        if board.is_full() {
            return Err(StrategyError::NoLegalMove);
        }

        let scores = scores_for(board, checker, self.depth);
        log::debug!("lookahead scores for {checker}: {scores:?}");

        max_score_column(&scores, self.tiebreak, &mut self.rng).ok_or(StrategyError::NoLegalMove)
    }

    fn name(&self) -> &str {
        "Lookahead"
    }

    fn params(&self) -> Option<String> {
        Some(format!("{}, {}", self.tiebreak, self.depth))
    }
}
