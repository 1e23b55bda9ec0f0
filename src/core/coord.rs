//! Cell coordinates.
//!
//! A `Coord` addresses one cell as `(row, col)`. Its textual form is the
//! cell key `"row-col"` (e.g. `"3-2"`), which is how a rendering layer
//! tags the cells it hands back on a click.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::error::LightsOutError;

/// Zero-based `(row, col)` cell address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

/// Neighbor offsets in flip order: north, south, west, east.
///
/// North/south step along the column axis and west/east along the row
/// axis, matching the cell-key layout where `row` is the vertical index.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether this coordinate lies on an `nrows x ncols` board.
    #[must_use]
    pub const fn in_bounds(self, nrows: usize, ncols: usize) -> bool {
        self.row < nrows && self.col < ncols
    }

    /// Offset this coordinate, returning `None` if it leaves the board.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize, nrows: usize, ncols: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let moved = Self::new(row, col);
        moved.in_bounds(nrows, ncols).then_some(moved)
    }

    /// The flip set for a toggle at this coordinate.
    ///
    /// The cell itself followed by its in-range orthogonal neighbors
    /// (north, south, west, east). No wraparound, so corners yield 3
    /// entries, edges 4 and a 1x1 board just the cell itself. An
    /// out-of-range `self` yields an empty set.
    #[must_use]
    pub fn plus_neighborhood(self, nrows: usize, ncols: usize) -> SmallVec<[Coord; 5]> {
        let mut out = SmallVec::new();
        if !self.in_bounds(nrows, ncols) {
            return out;
        }

        out.push(self);
        out.extend(
            NEIGHBOR_OFFSETS
                .iter()
                .filter_map(|&(dr, dc)| self.offset(dr, dc, nrows, ncols)),
        );
        out
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for Coord {
    type Err = LightsOutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LightsOutError::ParseCoord { input: s.to_string() };

        let (row, col) = s.split_once('-').ok_or_else(invalid)?;
        let row = row.trim().parse::<usize>().map_err(|_| invalid())?;
        let col = col.trim().parse::<usize>().map_err(|_| invalid())?;

        Ok(Self::new(row, col))
    }
}
