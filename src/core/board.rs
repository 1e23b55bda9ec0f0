//! The board: a fixed-size grid of lit/unlit cells.
//!
//! ## Immutability
//!
//! A `Board` is a value. Toggling produces a new board and leaves the
//! original untouched, so any snapshot a caller holds stays valid.
//!
//! ## Storage
//!
//! Rows are `im::Vector`s, so cloning a board is O(1) and a toggle only
//! copies the rows it actually flips. Untouched rows are shared between
//! the old and new snapshot.
//!
//! ## Text form
//!
//! ```text
//! . . .
//! O O .      O = lit, . = unlit
//! . . .
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::validate_dimensions;
use super::coord::Coord;
use super::error::{LightsOutError, Result};
use crate::engine;

/// Rectangular grid of cells, `true` meaning lit.
///
/// Invariant: exactly `nrows` rows, each with exactly `ncols` cells, and
/// both dimensions are positive.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct Board {
    rows: Vector<Vector<bool>>,
    ncols: usize,
}

impl Board {
    /// Build a board by evaluating `cell` for every coordinate.
    ///
    /// Cells are visited in row-major order, which keeps seeded
    /// generation reproducible.
    pub fn from_fn(nrows: usize, ncols: usize, mut cell: impl FnMut(Coord) -> bool) -> Result<Self> {
        validate_dimensions(nrows, ncols)?;

        let rows = (0..nrows)
            .map(|row| (0..ncols).map(|col| cell(Coord::new(row, col))).collect())
            .collect();

        Ok(Self { rows, ncols })
    }

    /// An all-unlit board.
    pub fn dark(nrows: usize, ncols: usize) -> Result<Self> {
        Self::from_fn(nrows, ncols, |_| false)
    }

    /// Build a board from explicit rows.
    ///
    /// ```
    /// use lights_out::Board;
    ///
    /// let board = Board::from_rows(vec![
    ///     vec![false, false, false],
    ///     vec![true, true, false],
    ///     vec![false, false, false],
    /// ]).unwrap();
    ///
    /// assert_eq!(board.to_string(), ". . .\nO O .\n. . .\n");
    /// ```
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        validate_dimensions(nrows, ncols)?;

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != ncols)
        {
            return Err(LightsOutError::RaggedRow {
                row,
                expected: ncols,
                found,
            });
        }

        let rows = rows.into_iter().map(Vector::from).collect();
        Ok(Self { rows, ncols })
    }

    /// Number of rows.
    #[must_use]
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Check whether `coord` addresses a cell of this board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.in_bounds(self.nrows(), self.ncols)
    }

    /// Cell state, or `None` if `coord` is off the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<bool> {
        self.rows.get(coord.row)?.get(coord.col).copied()
    }

    /// Cell state.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the board.
    #[must_use]
    pub fn is_lit(&self, coord: Coord) -> bool {
        self.rows[coord.row][coord.col]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &Vector<bool>> {
        self.rows.iter()
    }

    /// Iterate over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let ncols = self.ncols;
        (0..self.nrows()).flat_map(move |row| (0..ncols).map(move |col| Coord::new(row, col)))
    }

    /// Number of lit cells.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&lit| lit).count())
            .sum()
    }

    /// Apply the plus-shaped toggle at `coord`. See [`engine::toggle`].
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the board.
    #[must_use]
    pub fn toggled(&self, coord: Coord) -> Self {
        engine::toggle(self, coord.row, coord.col)
    }

    /// Checked variant of [`Board::toggled`].
    pub fn try_toggled(&self, coord: Coord) -> Result<Self> {
        engine::try_toggle(self, coord)
    }

    /// True if no cell is lit. See [`engine::has_won`].
    #[must_use]
    pub fn is_dark(&self) -> bool {
        engine::has_won(self)
    }

    /// Copy of this board with each of `cells` inverted.
    ///
    /// Only the rows containing a flipped cell are copied.
    pub(crate) fn with_flipped(&self, cells: impl IntoIterator<Item = Coord>) -> Self {
        let mut rows = self.rows.clone();
        for c in cells {
            let cell = &mut rows[c.row][c.col];
            *cell = !*cell;
        }
        Self {
            rows,
            ncols: self.ncols,
        }
    }
}

impl TryFrom<Vec<Vec<bool>>> for Board {
    type Error = LightsOutError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<bool>> {
    fn from(board: Board) -> Self {
        board
            .rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            let line: Vec<&str> = row.iter().map(|&lit| if lit { "O" } else { "." }).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
