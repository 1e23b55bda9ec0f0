//! Board configuration.
//!
//! The caller supplies the board size and the chance that any cell starts
//! lit. A seed makes generation reproducible.

use serde::{Deserialize, Serialize};

use super::error::{LightsOutError, Result};
use super::rng::DEFAULT_SEED;

/// Parameters for generating a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows (must be positive).
    pub nrows: usize,

    /// Number of columns (must be positive).
    pub ncols: usize,

    /// Probability that any single cell starts lit, within `[0, 1]`.
    pub chance_lit: f64,

    /// Seed for the session's random source.
    pub seed: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            nrows: 5,
            ncols: 5,
            chance_lit: 0.5,
            seed: DEFAULT_SEED,
        }
    }
}

impl BoardConfig {
    /// Create a config for an `nrows x ncols` board with default chance and seed.
    #[must_use]
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            ..Self::default()
        }
    }

    /// Set the chance that a cell starts lit.
    #[must_use]
    pub fn with_chance_lit(mut self, chance: f64) -> Self {
        self.chance_lit = chance;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check dimensions and probability.
    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.nrows, self.ncols)?;
        validate_probability(self.chance_lit)
    }
}

pub(crate) fn validate_dimensions(nrows: usize, ncols: usize) -> Result<()> {
    if nrows == 0 || ncols == 0 {
        return Err(LightsOutError::InvalidDimension { nrows, ncols });
    }
    Ok(())
}

pub(crate) fn validate_probability(chance: f64) -> Result<()> {
    // NaN fails the range check too.
    if !(0.0..=1.0).contains(&chance) {
        return Err(LightsOutError::InvalidProbability(chance));
    }
    Ok(())
}
