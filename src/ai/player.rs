use std::fmt;

use super::strategy::Strategy;
use crate::error::{GameError, StrategyError};
use crate::game::{Board, Checker, GameState};

/// One side of a match: a checker, a strategy, and how many moves it has made.
pub struct Player {
    checker: Checker,
    num_moves: usize,
    strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(checker: Checker, strategy: Box<dyn Strategy>) -> Self {
        Player {
            checker,
            num_moves: 0,
            strategy,
        }
    }

    pub fn checker(&self) -> Checker {
        self.checker
    }

    /// The opponent's checker
    pub fn opponent_checker(&self) -> Checker {
        self.checker.other()
    }

    /// Successful placements so far
    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub fn is_interactive(&self) -> bool {
        self.strategy.is_interactive()
    }

    /// Ask the strategy for a column without playing it.
    pub fn choose_move(&mut self, board: &Board) -> Result<usize, StrategyError> {
        self.strategy.choose_move(board, self.checker)
    }

    /// Choose a column and play it. Returns `(column, row)` of the placed checker.
    pub fn play(&mut self, state: &mut GameState) -> Result<(usize, usize), GameError> {
        debug_assert_eq!(state.current_player(), self.checker, "played out of turn");
        let col = self.choose_move(state.board())?;
        self.play_column(state, col).map(|row| (col, row))
    }

    /// Play a column chosen elsewhere (e.g. from a key press).
    pub fn play_column(&mut self, state: &mut GameState, col: usize) -> Result<usize, GameError> {
        let row = state.apply_move_mut(col)?;
        self.num_moves += 1;
        Ok(row)
    }

    /// Forget the move count for a new game.
    pub fn reset(&mut self) {
        self.num_moves = 0;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.checker)?;
        if let Some(params) = self.strategy.params() {
            write!(f, " ({params})")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("checker", &self.checker)
            .field("num_moves", &self.num_moves)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{LookaheadStrategy, RandomStrategy, TieBreak};
    use crate::error::MoveError;

    #[test]
    fn test_play_counts_moves() {
        let mut player = Player::new(Checker::X, Box::new(RandomStrategy::with_seed(1)));
        let mut state = GameState::initial();

        let (col, row) = player.play(&mut state).unwrap();
        assert_eq!(row, 5);
        assert_eq!(state.board().get(row, col), Checker::X.to_cell());
        assert_eq!(player.num_moves(), 1);

        player.reset();
        assert_eq!(player.num_moves(), 0);
    }

    #[test]
    fn test_failed_move_is_not_counted() {
        let mut player = Player::new(Checker::X, Box::new(RandomStrategy::with_seed(1)));
        let mut state = GameState::new(1, 2);
        state.apply_move_mut(0).unwrap(); // X
        state.apply_move_mut(1).unwrap(); // O, board full

        let err = player.play_column(&mut state, 0).unwrap_err();
        assert!(matches!(err, GameError::Move(MoveError::GameOver)));
        assert_eq!(player.num_moves(), 0);
    }

    #[test]
    fn test_display() {
        let random = Player::new(Checker::O, Box::new(RandomStrategy::new()));
        assert_eq!(random.to_string(), "Player O");
        assert_eq!(random.opponent_checker(), Checker::X);

        let ai = Player::new(
            Checker::X,
            Box::new(LookaheadStrategy::new(TieBreak::Random, 3)),
        );
        assert_eq!(ai.to_string(), "Player X (RANDOM, 3)");
        assert_eq!(ai.strategy_name(), "Lookahead");
    }
}
