//! Locking and line clearing.

use crate::grid::Grid;
use crate::pieces::Piece;

/// Bake `piece` into `grid` using its color.
///
/// Cells already holding a color are overwritten: a piece spawned onto the
/// stack locks on top of it and the game-over check takes over from there.
///
/// # Panics
///
/// If any filled cell lies outside the grid.
pub fn merge(piece: &Piece, grid: &mut Grid) {
    for (row, col) in piece.cells() {
        grid.set(row, col, piece.color);
    }
}

/// Remove every full row, bottom to top, and return how many were removed.
///
/// Each removal pulls the rows above down by one and adds an empty row at the
/// top, so the same index is examined again before moving up.
pub fn clear_full_lines(grid: &mut Grid) -> usize {
    let mut cleared = 0;
    let mut row = grid.rows();
    while row > 0 {
        if grid.is_row_full(row - 1) {
            grid.clear_row(row - 1);
            cleared += 1;
        } else {
            row -= 1;
        }
    }
    cleared
}
