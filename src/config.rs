use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::ai::{LookaheadStrategy, ManualStrategy, Player, RandomStrategy, Strategy, TieBreak};
use crate::error::ConfigError;
use crate::game::{Checker, COLS, ROWS};

/// How a side picks its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Human,
    Random,
    #[serde(alias = "ai")]
    Lookahead,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrategyKind::Human => "human",
            StrategyKind::Random => "random",
            StrategyKind::Lookahead => "lookahead",
        };
        f.write_str(label)
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    /// Accepts names as well as the menu numbers 1 (human), 2 (random), 3 (AI).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "1" => Ok(StrategyKind::Human),
            "random" | "2" => Ok(StrategyKind::Random),
            "lookahead" | "ai" | "3" => Ok(StrategyKind::Lookahead),
            _ => Err(ConfigError::UnknownStrategy(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: ROWS,
            width: COLS,
        }
    }
}

/// One side's strategy settings. `tiebreak` and `lookahead` only apply to
/// [`StrategyKind::Lookahead`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub kind: StrategyKind,
    pub tiebreak: TieBreak,
    pub lookahead: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            kind: StrategyKind::Human,
            tiebreak: TieBreak::Last,
            lookahead: 2,
        }
    }
}

impl PlayerConfig {
    pub fn lookahead(tiebreak: TieBreak, depth: usize) -> Self {
        PlayerConfig {
            kind: StrategyKind::Lookahead,
            tiebreak,
            lookahead: depth,
        }
    }

    pub fn random() -> Self {
        PlayerConfig {
            kind: StrategyKind::Random,
            ..Self::default()
        }
    }

    /// Build the strategy for this side. Humans read from stdin.
    pub fn build_strategy(&self, seed: Option<u64>) -> Box<dyn Strategy> {
        match self.kind {
            StrategyKind::Human => Box::new(ManualStrategy::stdio()),
            StrategyKind::Random => Box::new(match seed {
                Some(seed) => RandomStrategy::with_seed(seed),
                None => RandomStrategy::new(),
            }),
            StrategyKind::Lookahead => Box::new(match seed {
                Some(seed) => LookaheadStrategy::with_seed(self.tiebreak, self.lookahead, seed),
                None => LookaheadStrategy::new(self.tiebreak, self.lookahead),
            }),
        }
    }

    pub fn build_player(&self, checker: Checker, seed: Option<u64>) -> Player {
        Player::new(checker, self.build_strategy(seed))
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Seed for every random choice; `None` draws from the OS.
    pub seed: Option<u64>,
    pub board: BoardConfig,
    pub x: PlayerConfig,
    pub o: PlayerConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.height == 0 {
            return Err(ConfigError::Validation("board.height must be >= 1".into()));
        }
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be >= 1".into()));
        }
        Ok(())
    }

    /// Settings for the side playing `checker`.
    pub fn player(&self, checker: Checker) -> &PlayerConfig {
        match checker {
            Checker::X => &self.x,
            Checker::O => &self.o,
        }
    }

    pub fn player_mut(&mut self, checker: Checker) -> &mut PlayerConfig {
        match checker {
            Checker::X => &mut self.x,
            Checker::O => &mut self.o,
        }
    }

    /// Per-side seed so the two sides do not mirror each other.
    pub fn seed_for(&self, checker: Checker) -> Option<u64> {
        let offset = match checker {
            Checker::X => 0,
            Checker::O => 1,
        };
        self.seed.map(|s| s.wrapping_add(offset))
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
