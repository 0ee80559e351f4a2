//! Shape module - piece occupancy patterns and the rotation transform
//!
//! A shape is a small rectangular boolean matrix in its own local frame:
//! local `(0, 0)` is the top-left corner and maps onto the piece anchor.
//! Shapes are values; rotating one returns a new shape.

use arrayvec::ArrayVec;

use crate::types::RotateDirection;

/// Largest number of cells (filled or not) a shape matrix may hold (4x4).
pub const MAX_SHAPE_CELLS: usize = 16;

/// Rectangular occupancy matrix, stored row-major without heap allocation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    height: usize,
    width: usize,
    cells: ArrayVec<bool, MAX_SHAPE_CELLS>,
}

impl Shape {
    /// Build a shape from rows of 0/1 flags, top row first.
    ///
    /// # Panics
    ///
    /// If the rows are empty, ragged, or hold more than [`MAX_SHAPE_CELLS`] cells.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        assert!(height > 0 && width > 0, "shape must not be empty");
        assert!(
            height * width <= MAX_SHAPE_CELLS,
            "{height}x{width} shape exceeds {MAX_SHAPE_CELLS} cells"
        );

        let mut cells = ArrayVec::new();
        for row in rows {
            assert_eq!(row.len(), width, "shape rows must have equal length");
            cells.extend(row.iter().map(|&v| v != 0));
        }
        Self {
            height,
            width,
            cells,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether local cell `(row, col)` is part of the piece. Outside the matrix is never filled.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    /// Local `(row, col)` offsets of every filled cell, top to bottom, left to right.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(i, _)| ((i / self.width) as i32, (i % self.width) as i32))
    }

    /// Convenience wrapper around [`rotate`].
    pub fn rotated(&self, direction: RotateDirection) -> Shape {
        rotate(self, direction)
    }
}

/// Rotate a shape by 90°.
///
/// The matrix is transposed, then `Clockwise` reverses the order of the
/// transposed rows and `CounterClockwise` reverses each transposed row.
/// The result keeps its top-left corner at the same anchor; there is no
/// recentring.
///
/// ```
/// use blockfall_core::{rotate, Shape};
/// use blockfall_types::RotateDirection;
///
/// let l = Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]);
/// let turned = rotate(&l, RotateDirection::Clockwise);
/// assert_eq!(turned, Shape::from_rows(&[&[0, 1], &[0, 1], &[1, 1]]));
/// assert_eq!(rotate(&turned, RotateDirection::CounterClockwise), l);
/// ```
pub fn rotate(shape: &Shape, direction: RotateDirection) -> Shape {
    // Transposed dimensions.
    let height = shape.width;
    let width = shape.height;

    let mut cells = ArrayVec::new();
    for r in 0..height {
        for c in 0..width {
            // transposed[r][c] == shape[c][r]
            let (tr, tc) = match direction {
                RotateDirection::Clockwise => (height - 1 - r, c),
                RotateDirection::CounterClockwise => (r, width - 1 - c),
            };
            cells.push(shape.is_filled(tc, tr));
        }
    }

    Shape {
        height,
        width,
        cells,
    }
}
