use super::{Board, Checker};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Checker),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current: Checker,
    outcome: Option<GameOutcome>,
    moves_played: usize,
}

impl GameState {
    /// Create initial game state on an empty `height` x `width` board.
    /// Panics on a zero dimension, like [`Board::new`].
    pub fn new(height: usize, width: usize) -> Self {
        Self::from_board(Board::new(height, width), Checker::X)
    }

    /// Initial state on the standard 6x7 board
    pub fn initial() -> Self {
        Self::from_board(Board::standard(), Checker::X)
    }

    /// Resume from an existing position with `to_move` next.
    pub fn from_board(board: Board, to_move: Checker) -> Self {
        let outcome = Self::outcome_of(&board);
        let moves_played = (0..board.width())
            .map(|col| board.column_height(col))
            .sum();
        GameState {
            board,
            current: to_move,
            outcome,
            moves_played,
        }
    }

    fn outcome_of(board: &Board) -> Option<GameOutcome> {
        Checker::ALL
            .into_iter()
            .find(|&c| board.is_winning_for(c))
            .map(GameOutcome::Winner)
            .or_else(|| board.is_full().then_some(GameOutcome::Draw))
    }

    /// Get the checker to move
    pub fn current_player(&self) -> Checker {
        self.current
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Total checkers placed so far
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place, returns the row the checker landed in
    pub fn apply_move_mut(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self.board.drop(self.current, column)?;
        self.moves_played += 1;

        if self.board.is_winning_for(self.current) {
            self.outcome = Some(GameOutcome::Winner(self.current));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current = self.current.other();
        Ok(row)
    }

    /// Clear the board and give the first move back to X
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = Checker::X;
        self.outcome = None;
        self.moves_played = 0;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
