//! Move selection: the [`Strategy`] trait, its human, random, and lookahead
//! implementations, and the [`Player`] that pairs a strategy with a checker.

pub mod lookahead;
mod manual;
mod player;
mod random;
mod strategy;

pub use lookahead::{max_score_column, scores_for, LookaheadStrategy, TieBreak};
pub use manual::{LineSource, ManualStrategy, SharedStdin};
pub use player::Player;
pub use random::RandomStrategy;
pub use strategy::Strategy;
