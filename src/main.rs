use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::ai::TieBreak;
use connect_four::config::{AppConfig, StrategyKind};
use connect_four::driver::Match;
use connect_four::game::{Checker, GameOutcome};
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four against people or the computer.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Plain text game on stdin/stdout instead of the terminal UI
    #[arg(long)]
    console: bool,

    /// Board height
    #[arg(long)]
    height: Option<usize>,

    /// Board width
    #[arg(long)]
    width: Option<usize>,

    /// Player X: human, random, or lookahead (also 1, 2, 3)
    #[arg(long = "x")]
    x: Option<StrategyKind>,

    /// Player O: human, random, or lookahead (also 1, 2, 3)
    #[arg(long = "o")]
    o: Option<StrategyKind>,

    /// Tiebreak for a lookahead X: LEFT, RIGHT, or RANDOM
    #[arg(long)]
    x_tiebreak: Option<TieBreak>,

    /// Tiebreak for a lookahead O: LEFT, RIGHT, or RANDOM
    #[arg(long)]
    o_tiebreak: Option<TieBreak>,

    /// Lookahead depth for X
    #[arg(long)]
    x_lookahead: Option<usize>,

    /// Lookahead depth for O
    #[arg(long)]
    o_lookahead: Option<usize>,

    /// Seed for reproducible random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Print a default configuration file and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    /// Apply command line overrides on top of the file configuration.
    fn apply(&self, config: &mut AppConfig) {
        if let Some(height) = self.height {
            config.board.height = height;
        }
        if let Some(width) = self.width {
            config.board.width = width;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        let sides = [
            (Checker::X, self.x, self.x_tiebreak, self.x_lookahead),
            (Checker::O, self.o, self.o_tiebreak, self.o_lookahead),
        ];
        for (checker, kind, tiebreak, lookahead) in sides {
            let side = config.player_mut(checker);
            if let Some(kind) = kind {
                side.kind = kind;
            }
            if let Some(tiebreak) = tiebreak {
                side.tiebreak = tiebreak;
            }
            if let Some(lookahead) = lookahead {
                side.lookahead = lookahead;
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    cli.apply(&mut config);
    config.validate().context("invalid configuration")?;

    if cli.console {
        run_console(&config)
    } else {
        run_tui(&config)
    }
}

fn run_console(config: &AppConfig) -> Result<()> {
    let mut game = Match::from_config(config).context("setting up players")?;

    println!("Welcome to Connect Four!");
    println!();
    println!("{}", game.board());

    while !game.is_over() {
        println!();
        println!("{}'s turn", game.current_player());
        let report = game.play_turn()?;
        println!("{}", game.board());

        match report.outcome {
            Some(GameOutcome::Winner(checker)) => {
                println!();
                println!(
                    "Player {} wins in {} moves.\nCongratulations!",
                    checker, report.player_moves
                );
            }
            Some(GameOutcome::Draw) => {
                println!();
                println!("It's a tie!");
            }
            None => {}
        }
    }
    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let mut app = App::new(config).context("setting up players")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the app failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res?;
    Ok(())
}
