use crate::error::StrategyError;
use crate::game::{Board, Checker};

/// Universal interface for every way of picking a column.
///
/// Strategies borrow the board only for the duration of a call and never
/// mutate it. The returned column always satisfies [`Board::can_drop`].
pub trait Strategy {
    /// Select a column for `checker` on `board`.
    fn choose_move(&mut self, board: &Board, checker: Checker) -> Result<usize, StrategyError>;

    /// Return the strategy's display name.
    fn name(&self) -> &str;

    /// Tuning parameters worth showing next to the player, if any.
    fn params(&self) -> Option<String> {
        None
    }

    /// Whether a person supplies the moves.
    fn is_interactive(&self) -> bool {
        false
    }
}
