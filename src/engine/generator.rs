//! Random board generation.

use log::debug;

use crate::core::config::{validate_dimensions, validate_probability};
use crate::core::{Board, BoardConfig, GameRng, Result};

/// Generate an `nrows x ncols` board where each cell is lit independently.
///
/// Every cell draws `x` uniformly from `[0, 1)` and is lit iff
/// `x <= chance_lit`. Draws happen in row-major order, one per cell, so
/// the same RNG state always yields the same board. A `chance_lit` of 0
/// never lights a cell and 1 always does.
///
/// Fails with `InvalidDimension` or `InvalidProbability` before drawing
/// anything.
///
/// ```
/// use lights_out::{engine, GameRng};
///
/// let mut rng = GameRng::new(1);
/// let board = engine::generate(3, 4, 1.0, &mut rng).unwrap();
/// assert_eq!(board.lit_count(), 12);
/// ```
pub fn generate(nrows: usize, ncols: usize, chance_lit: f64, rng: &mut GameRng) -> Result<Board> {
    validate_dimensions(nrows, ncols)?;
    validate_probability(chance_lit)?;

    let board = Board::from_fn(nrows, ncols, |_| {
        let draw = rng.gen_unit();
        chance_lit > 0.0 && draw <= chance_lit
    })?;

    debug!(
        "generated {}x{} board (chance_lit={}, lit={})",
        nrows,
        ncols,
        chance_lit,
        board.lit_count()
    );
    Ok(board)
}

/// Board generator bound to a configuration.
///
/// Owns nothing but the parameters; the caller supplies the RNG on each
/// call so sessions can keep independent streams.
#[derive(Clone, Debug)]
pub struct BoardGenerator {
    pub(crate) config: BoardConfig,
}

impl BoardGenerator {
    /// Create a generator, validating the configuration up front.
    pub fn new(config: BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The generator's configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Generate a fresh board.
    pub fn generate(&self, rng: &mut GameRng) -> Result<Board> {
        generate(self.config.nrows, self.config.ncols, self.config.chance_lit, rng)
    }
}
