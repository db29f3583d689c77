use crate::ai::{ManualStrategy, Player};
use crate::config::{AppConfig, StrategyKind};
use crate::driver::{Match, TurnReport};
use crate::error::GameError;
use crate::game::{Checker, GameOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game: Match,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// Set up a match from configuration. Human sides take their moves from
    /// the keyboard instead of stdin.
    pub fn new(config: &AppConfig) -> Result<Self, GameError> {
        let [x, o] = Checker::ALL.map(|checker| {
            let side = config.player(checker);
            match side.kind {
                StrategyKind::Human => Player::new(checker, Box::new(ManualStrategy::detached())),
                _ => side.build_player(checker, config.seed_for(checker)),
            }
        });
        let game = Match::new(x, o, config.board.height, config.board.width)?;
        Ok(App {
            selected_column: game.board().width() / 2, // Start in middle
            game,
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick();
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;
        let width = self.game.board().width();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < width {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let col = c.to_digit(10).unwrap_or(0) as usize;
                if col < width {
                    self.selected_column = col;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_checker();
            }
            KeyCode::Char('r') => {
                self.game.reset();
                self.selected_column = width / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the current human player's checker in the selected column
    fn drop_checker(&mut self) {
        if self.game.is_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if !self.game.current_player().is_interactive() {
            self.message = Some("Wait for the computer to move.".to_string());
            return;
        }

        let result = self.game.play_column(self.selected_column);
        self.after_move(result);
    }

    /// Let a computer side make its move, one per tick so moves stay visible.
    fn tick(&mut self) {
        if self.game.is_over() || self.game.current_player().is_interactive() {
            return;
        }
        let result = self.game.play_turn();
        self.after_move(result);
    }

    fn after_move(&mut self, result: Result<TurnReport, GameError>) {
        match result {
            Ok(report) => {
                if let Some(outcome) = report.outcome {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(checker) => format!(
                            "Player {} wins in {} moves. Congratulations!",
                            checker, report.player_moves
                        ),
                        GameOutcome::Draw => "It's a draw!".to_string(),
                    });
                }
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game, self.selected_column, &self.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::TieBreak;
    use crate::config::PlayerConfig;
    use crate::game::Cell;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn human_vs_human() -> App {
        App::new(&AppConfig::default()).unwrap()
    }

    #[test]
    fn test_starts_in_middle_column() {
        let app = human_vs_human();
        assert_eq!(app.selected_column, 3);
    }

    #[test]
    fn test_column_selection_is_clamped() {
        let mut app = human_vs_human();
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.selected_column, 6);
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Left));
        }
        assert_eq!(app.selected_column, 0);

        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(app.selected_column, 5);
        app.handle_key(key(KeyCode::Char('9')));
        assert_eq!(app.selected_column, 5);
    }

    #[test]
    fn test_enter_drops_for_human() {
        let mut app = human_vs_human();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.game.board().get(5, 3), Cell::X);
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.game.board().get(4, 3), Cell::O);
    }

    #[test]
    fn test_full_column_shows_message() {
        let mut config = AppConfig::default();
        config.board.height = 1;
        let mut app = App::new(&config).unwrap();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.message.as_deref(),
            Some("illegal move: column 3 is full")
        );
    }

    #[test]
    fn test_computer_moves_on_tick() {
        let mut config = AppConfig::default();
        config.o = PlayerConfig::lookahead(TieBreak::First, 1);
        let mut app = App::new(&config).unwrap();

        // Human X goes first, so a tick does nothing yet.
        app.tick();
        assert_eq!(app.game.state().moves_played(), 0);

        app.handle_key(key(KeyCode::Enter));
        // Keys cannot move for the computer.
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.message.as_deref(),
            Some("Wait for the computer to move.")
        );

        app.tick();
        assert_eq!(app.game.state().moves_played(), 2);
        assert_eq!(app.game.board().get(5, 0), Cell::O);
    }

    #[test]
    fn test_computers_finish_game_and_restart() {
        let mut config = AppConfig::default();
        config.x = PlayerConfig::random();
        config.o = PlayerConfig::lookahead(TieBreak::Random, 1);
        config.seed = Some(4);
        let mut app = App::new(&config).unwrap();

        let mut ticks = 0;
        while !app.game.is_over() {
            app.tick();
            ticks += 1;
            assert!(ticks <= 42, "game did not finish");
        }
        assert!(app.message.is_some());

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.message.as_deref(),
            Some("Game over! Press 'r' to restart.")
        );

        app.handle_key(key(KeyCode::Char('r')));
        assert!(!app.game.is_over());
        assert_eq!(app.message.as_deref(), Some("New game started!"));
    }

    #[test]
    fn test_quit() {
        let mut app = human_vs_human();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
