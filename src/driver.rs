//! Turn driver: alternates two players over a shared [`GameState`] until
//! someone wins or the board fills up.

use crate::ai::Player;
use crate::config::AppConfig;
use crate::error::{ConfigError, GameError};
use crate::game::{Board, Checker, GameOutcome, GameState};

/// What happened on a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub checker: Checker,
    pub column: usize,
    pub row: usize,
    /// The mover's own move count after this turn.
    pub player_moves: usize,
    pub outcome: Option<GameOutcome>,
}

/// A game between two players. X always moves first.
pub struct Match {
    players: [Player; 2],
    state: GameState,
}

impl Match {
    /// Pair two players on an empty `height` x `width` board.
    ///
    /// Order does not matter, but the checkers must differ and both
    /// dimensions must be at least 1.
    pub fn new(a: Player, b: Player, height: usize, width: usize) -> Result<Self, GameError> {
        if height == 0 || width == 0 {
            return Err(ConfigError::Validation(format!(
                "board must be at least 1x1, got {height}x{width}"
            ))
            .into());
        }
        if a.checker() == b.checker() {
            return Err(GameError::DuplicateChecker(a.checker()));
        }
        let players = if a.checker() == Checker::X { [a, b] } else { [b, a] };
        Ok(Match {
            players,
            state: GameState::new(height, width),
        })
    }

    /// Build both sides and the board from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, GameError> {
        config.validate()?;
        let [x, o] = Checker::ALL.map(|c| config.player(c).build_player(c, config.seed_for(c)));
        Self::new(x, o, config.board.height, config.board.width)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn player(&self, checker: Checker) -> &Player {
        &self.players[Self::seat(checker)]
    }

    fn seat(checker: Checker) -> usize {
        match checker {
            Checker::X => 0,
            Checker::O => 1,
        }
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.state.current_player())
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Let the player to move choose and play a column.
    pub fn play_turn(&mut self) -> Result<TurnReport, GameError> {
        let checker = self.state.current_player();
        let player = &mut self.players[Self::seat(checker)];
        let (column, row) = player.play(&mut self.state)?;
        Ok(self.report(checker, column, row))
    }

    /// Play a column for the player to move, bypassing its strategy.
    pub fn play_column(&mut self, column: usize) -> Result<TurnReport, GameError> {
        let checker = self.state.current_player();
        let player = &mut self.players[Self::seat(checker)];
        let row = player.play_column(&mut self.state, column)?;
        Ok(self.report(checker, column, row))
    }

    fn report(&self, checker: Checker, column: usize, row: usize) -> TurnReport {
        let report = TurnReport {
            checker,
            column,
            row,
            player_moves: self.player(checker).num_moves(),
            outcome: self.state.outcome(),
        };
        log::debug!("{checker} dropped into column {column} (row {row})");
        match report.outcome {
            Some(GameOutcome::Winner(winner)) => {
                log::info!("{winner} wins in {} moves", report.player_moves)
            }
            Some(GameOutcome::Draw) => {
                log::info!("game drawn after {} moves", self.state.moves_played())
            }
            None => {}
        }
        report
    }

    /// Play until the game ends, calling `observer` after every turn.
    pub fn play_to_end<F>(&mut self, mut observer: F) -> Result<GameOutcome, GameError>
    where
        F: FnMut(&TurnReport, &Board),
    {
        loop {
            if let Some(outcome) = self.state.outcome() {
                return Ok(outcome);
            }
            let report = self.play_turn()?;
            observer(&report, self.state.board());
        }
    }

    /// Clear the board and both move counters.
    pub fn reset(&mut self) {
        self.state.reset();
        for player in &mut self.players {
            player.reset();
        }
    }
}
