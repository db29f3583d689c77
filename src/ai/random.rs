use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::strategy::Strategy;
use crate::error::StrategyError;
use crate::game::{Board, Checker};

/// A strategy that selects uniformly at random from legal columns.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible games and tests.
    pub fn with_seed(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&mut self, board: &Board, _checker: Checker) -> Result<usize, StrategyError> {
        let columns = board.legal_columns();
        if columns.is_empty() {
            return Err(StrategyError::NoLegalMove);
        }
        let idx = self.rng.random_range(0..columns.len());
        Ok(columns[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}
