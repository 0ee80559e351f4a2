//! Pieces module - tetromino table, active piece and the piece factory

use crate::rng::{RandomSource, SimpleRng};
use crate::shape::Shape;
use crate::types::{Color, TetrominoKind, SPAWN_COL, SPAWN_ROW};

/// Spawn-orientation shape of a tetromino kind.
pub fn spawn_shape(kind: TetrominoKind) -> Shape {
    match kind {
        TetrominoKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        TetrominoKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        TetrominoKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        TetrominoKind::L => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        TetrominoKind::J => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
        TetrominoKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        TetrominoKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
    }
}

/// Active falling piece
///
/// `row`/`col` is the grid position of the shape's local origin (its top-left corner).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: TetrominoKind,
    pub shape: Shape,
    pub color: Color,
    pub row: i32,
    pub col: i32,
}

impl Piece {
    /// Create a piece of `kind` at the spawn anchor
    pub fn new(kind: TetrominoKind) -> Self {
        Self::at(kind, SPAWN_ROW, SPAWN_COL)
    }

    /// Create a piece of `kind` in spawn orientation at an arbitrary anchor
    pub fn at(kind: TetrominoKind, row: i32, col: i32) -> Self {
        Self {
            kind,
            shape: spawn_shape(kind),
            color: kind.color(),
            row,
            col,
        }
    }

    /// Grid coordinates of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dr, dc)| (self.row + dr, self.col + dc))
    }

    /// Leftmost grid column covered by a filled cell.
    pub fn leftmost_col(&self) -> i32 {
        self.cells().map(|(_, c)| c).min().unwrap_or(self.col)
    }
}

/// Produces pieces of uniformly random kind at the spawn anchor.
pub struct PieceFactory {
    source: Box<dyn RandomSource + Send>,
}

impl PieceFactory {
    pub fn new(source: impl RandomSource + Send + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Factory backed by a [`SimpleRng`] with the given seed.
    pub fn seeded(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }

    /// Draw the next piece. The only side effect is one draw from the random source.
    pub fn spawn(&mut self) -> Piece {
        let all = TetrominoKind::ALL;
        let index = self.source.next_index(all.len()) % all.len();
        Piece::new(all[index])
    }
}

impl std::fmt::Debug for PieceFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PieceFactory").finish_non_exhaustive()
    }
}
