//! Win detection.

use crate::core::Board;

/// True iff every cell is unlit. Stops at the first lit cell.
#[must_use]
pub fn has_won(board: &Board) -> bool {
    board.rows().all(|row| !row.iter().any(|&lit| lit))
}
