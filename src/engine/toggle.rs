//! The plus-shaped toggle rule.

use log::trace;

use crate::core::{Board, Coord, LightsOutError, Result};

/// Toggle the cell at `(row, col)` and its orthogonal neighbors.
///
/// Returns a new board; `board` itself is never modified. Neighbors that
/// fall off the edge are skipped (no wraparound), so a corner flips 3
/// cells, an edge 4 and an interior cell 5.
///
/// # Panics
///
/// Panics if `(row, col)` is off the board. Callers take coordinates from
/// the board they are displaying, so a miss is a bug on their side. Use
/// [`try_toggle`] where the coordinate comes from untrusted input.
///
/// ```
/// use lights_out::{engine, Board};
///
/// let board = Board::dark(3, 3).unwrap();
/// let next = engine::toggle(&board, 1, 1);
///
/// assert_eq!(next.to_string(), ". O .\nO O O\n. O .\n");
/// assert!(board.is_dark());
/// ```
#[must_use]
pub fn toggle(board: &Board, row: usize, col: usize) -> Board {
    let coord = Coord::new(row, col);
    assert!(
        board.contains(coord),
        "toggle at {} outside {}x{} board",
        coord,
        board.nrows(),
        board.ncols()
    );
    flip_plus(board, coord)
}

/// Checked toggle: `OutOfBounds` instead of a panic.
pub fn try_toggle(board: &Board, coord: Coord) -> Result<Board> {
    if !board.contains(coord) {
        return Err(LightsOutError::OutOfBounds {
            coord,
            nrows: board.nrows(),
            ncols: board.ncols(),
        });
    }
    Ok(flip_plus(board, coord))
}

fn flip_plus(board: &Board, coord: Coord) -> Board {
    let cells = coord.plus_neighborhood(board.nrows(), board.ncols());
    trace!("toggle {} flips {} cells", coord, cells.len());
    board.with_flipped(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diff(a: &Board, b: &Board) -> Vec<Coord> {
        a.coords().filter(|&c| a.is_lit(c) != b.is_lit(c)).collect()
    }

    #[test]
    fn test_center_flips_plus() {
        let board = Board::dark(3, 3).unwrap();
        let next = toggle(&board, 1, 1);
        assert_eq!(
            Vec::<Vec<bool>>::from(next),
            vec![
                vec![false, true, false],
                vec![true, true, true],
                vec![false, true, false],
            ]
        );
    }

    #[test]
    fn test_corner_flips_three() {
        let board = Board::dark(3, 3).unwrap();
        let next = toggle(&board, 0, 0);
        assert_eq!(
            diff(&board, &next),
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 0)]
        );
    }

    #[test]
    fn test_edge_flips_four() {
        let board = Board::dark(3, 3).unwrap();
        assert_eq!(diff(&board, &toggle(&board, 0, 1)).len(), 4);
        assert_eq!(diff(&board, &toggle(&board, 2, 1)).len(), 4);
    }

    #[test]
    fn test_single_cell_board() {
        let board = Board::dark(1, 1).unwrap();
        let next = toggle(&board, 0, 0);
        assert_eq!(diff(&board, &next), vec![Coord::new(0, 0)]);
    }

    #[test]
    fn test_single_column_interior() {
        let board = Board::dark(5, 1).unwrap();
        let next = toggle(&board, 2, 0);
        assert_eq!(
            diff(&board, &next),
            vec![Coord::new(1, 0), Coord::new(2, 0), Coord::new(3, 0)]
        );
    }

    #[test]
    fn test_single_row_interior() {
        let board = Board::dark(1, 5).unwrap();
        let next = toggle(&board, 0, 2);
        assert_eq!(
            diff(&board, &next),
            vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(0, 3)]
        );
    }

    #[test]
    fn test_toggle_flips_lit_cells_off() {
        let board = Board::from_rows(vec![
            vec![false, true, false],
            vec![true, true, true],
            vec![false, true, false],
        ])
        .unwrap();
        assert!(toggle(&board, 1, 1).is_dark());
    }

    #[test]
    fn test_input_unchanged() {
        let board = Board::from_rows(vec![vec![true, false], vec![false, true]]).unwrap();
        let before = board.clone();
        let _ = toggle(&board, 0, 0);
        assert_eq!(board, before);
    }

    #[test]
    #[should_panic(expected = "outside 3x3 board")]
    fn test_out_of_range_panics() {
        let board = Board::dark(3, 3).unwrap();
        let _ = toggle(&board, 3, 0);
    }

    #[test]
    fn test_try_toggle_out_of_range() {
        let board = Board::dark(2, 3).unwrap();
        assert_eq!(
            try_toggle(&board, Coord::new(0, 3)),
            Err(LightsOutError::OutOfBounds {
                coord: Coord::new(0, 3),
                nrows: 2,
                ncols: 3
            })
        );
        assert_eq!(try_toggle(&board, Coord::new(1, 2)).unwrap(), toggle(&board, 1, 2));
    }
}
