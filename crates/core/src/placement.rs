//! Placement validation - decides whether a shape fits at an anchor.

use crate::grid::Grid;
use crate::shape::Shape;

/// Check whether `shape` anchored at `(row, col)` fits on `grid`.
///
/// A filled cell is rejected when it lands below the last row, left or right of
/// the grid, or on an occupied cell. Cells above the top row are accepted;
/// only the game-over check polices the top edge.
pub fn can_place(shape: &Shape, row: i32, col: i32, grid: &Grid) -> bool {
    let rows = grid.rows() as i32;
    let cols = grid.cols() as i32;

    shape.filled_cells().all(|(dr, dc)| {
        let r = row + dr;
        let c = col + dc;
        if r >= rows || c < 0 || c >= cols {
            return false;
        }
        r < 0 || !grid.is_occupied(r, c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::spawn_shape;
    use crate::types::TetrominoKind;

    #[test]
    fn fits_on_empty_grid() {
        let grid = Grid::default();
        let o = spawn_shape(TetrominoKind::O);
        assert!(can_place(&o, 0, 4, &grid));
        assert!(can_place(&o, 18, 8, &grid));
    }

    #[test]
    fn rejects_walls_and_floor() {
        let grid = Grid::default();
        let o = spawn_shape(TetrominoKind::O);
        assert!(!can_place(&o, 0, -1, &grid));
        assert!(!can_place(&o, 0, 9, &grid));
        assert!(!can_place(&o, 19, 0, &grid));
    }

    #[test]
    fn rejects_overlap_with_locked_cells() {
        let grid = Grid::from_ascii(&["....", "....", ".Z..", "...."]);
        let o = spawn_shape(TetrominoKind::O);
        assert!(!can_place(&o, 1, 0, &grid));
        assert!(can_place(&o, 0, 2, &grid));
        assert!(can_place(&o, 2, 2, &grid));
    }

    #[test]
    fn empty_shape_cells_do_not_collide() {
        // T's top corners are empty and may overlap locked cells.
        let grid = Grid::from_ascii(&["I.I", "..."]);
        let t = spawn_shape(TetrominoKind::T);
        assert!(can_place(&t, 0, 0, &grid));
    }

    #[test]
    fn cells_above_the_top_row_are_accepted() {
        let grid = Grid::from_ascii(&["LLLL", "...."]);
        let i = spawn_shape(TetrominoKind::I);
        assert!(can_place(&i, -1, 0, &grid));
        assert!(can_place(&i, -5, 0, &grid));
        // Horizontal bounds still apply up there.
        assert!(!can_place(&i, -1, 1, &grid));
    }
}
