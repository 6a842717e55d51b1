//! Search configuration.

use crate::common::SolverError;

/// Default cap on consecutive iterations that leave the board unchanged.
pub const DEFAULT_STALL_LIMIT: usize = 10_000;

/// Configuration for a search run.
///
/// # Examples
///
/// ```
/// use battleship_solitaire::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_budget(500)
///     .with_seed(7)
///     .with_stall_limit(None);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct SearchConfig {
    /// Number of counted (board-changing) iterations to run.
    pub budget: usize,
    /// RNG seed for reproducible runs.
    pub seed: Option<u64>,
    /// Stop after this many consecutive iterations that leave the board
    /// unchanged. `None` repeats such iterations indefinitely.
    pub stall_limit: Option<usize>,
    /// Stop as soon as the best board scores 0.
    pub stop_when_solved: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            budget: 1000,
            seed: None,
            stall_limit: Some(DEFAULT_STALL_LIMIT),
            stop_when_solved: true,
        }
    }
}

impl SearchConfig {
    pub fn with_budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_stall_limit(mut self, limit: Option<usize>) -> Self {
        self.stall_limit = limit;
        self
    }

    pub fn with_stop_when_solved(mut self, stop: bool) -> Self {
        self.stop_when_solved = stop;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.stall_limit == Some(0) {
            return Err(SolverError::InvalidConfig("stall_limit must be positive"));
        }
        Ok(())
    }

    /// RNG seeded from `seed`, or from OS entropy when no seed is set.
    #[cfg(feature = "std")]
    pub fn rng(&self) -> rand::rngs::SmallRng {
        use rand::SeedableRng;
        match self.seed {
            Some(s) => rand::rngs::SmallRng::seed_from_u64(s),
            None => rand::rngs::SmallRng::from_rng(&mut rand::rng()),
        }
    }
}
