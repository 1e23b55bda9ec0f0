//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

use super::coord::Coord;

/// Errors raised by board construction, generation and sessions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LightsOutError {
    /// Row or column count was zero.
    #[error("invalid board dimensions {nrows}x{ncols}: both must be positive")]
    InvalidDimension {
        /// Requested row count.
        nrows: usize,
        /// Requested column count.
        ncols: usize,
    },

    /// Lit probability outside `[0, 1]` (or NaN).
    #[error("invalid lit probability {0}: must be within [0, 1]")]
    InvalidProbability(f64),

    /// A row supplied to `Board::from_rows` has the wrong width.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width actually found.
        found: usize,
    },

    /// Coordinate does not address a cell of the board.
    #[error("cell {coord} is outside the {nrows}x{ncols} board")]
    OutOfBounds {
        /// The rejected coordinate.
        coord: Coord,
        /// Board row count.
        nrows: usize,
        /// Board column count.
        ncols: usize,
    },

    /// Cell key was not of the form `row-col`.
    #[error("invalid cell key {input:?}: expected \"row-col\"")]
    ParseCoord {
        /// The rejected input.
        input: String,
    },

    /// The session is already won; no further moves are accepted.
    #[error("game is already won")]
    GameOver,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LightsOutError>;
