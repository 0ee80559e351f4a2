//! Grid module - the fixed-size playfield
//!
//! Cells are stored in a flat row-major vector for cache locality.
//! Coordinates are `(row, col)`: rows grow downwards from 0 at the top,
//! columns grow rightwards from 0. Signed coordinates are accepted everywhere
//! so callers can ask about cells a piece would occupy off the board.

use crate::types::{Cell, Color, TetrominoKind, GRID_COLS, GRID_ROWS};

/// The playfield - `rows` x `cols` cells, each empty or holding a color tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid. Dimensions are fixed for the grid's lifetime.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid must have at least one cell");
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Build a grid from ASCII rows, top row first.
    ///
    /// `.` is an empty cell; a piece letter (`I`, `O`, `T`, `L`, `J`, `S`, `Z`,
    /// any case) is a cell locked with that piece's color. All rows must have
    /// the same length.
    ///
    /// ```
    /// use blockfall_core::Grid;
    ///
    /// let grid = Grid::from_ascii(&["..", "OO"]);
    /// assert!(!grid.is_occupied(0, 0));
    /// assert!(grid.is_occupied(1, 1));
    /// ```
    pub fn from_ascii(rows: &[&str]) -> Self {
        let cols = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = Self::new(rows.len(), cols);
        for (r, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), cols, "ragged row {r}: {line:?}");
            for (c, ch) in line.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let kind = TetrominoKind::from_str(&ch.to_string())
                    .unwrap_or_else(|| panic!("unknown cell glyph {ch:?}"));
                grid.cells[r * cols + c] = Some(kind.color());
            }
        }
        grid
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at `(row, col)`, or None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// True if the cell is filled or lies outside the grid.
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        !matches!(self.get(row, col), Some(None))
    }

    /// Lock a color into a cell.
    ///
    /// # Panics
    ///
    /// If `(row, col)` is outside the grid.
    pub fn set(&mut self, row: i32, col: i32, color: Color) {
        let Some(idx) = self.index(row, col) else {
            panic!(
                "cell ({row}, {col}) is outside the {}x{} grid",
                self.rows, self.cols
            );
        };
        self.cells[idx] = Some(color);
    }

    /// Borrow one row of cells.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Iterate rows from top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.rows && self.row(row).iter().all(Option::is_some)
    }

    /// Remove `row` and insert an empty row at the top; rows above shift down by one.
    pub fn clear_row(&mut self, row: usize) {
        assert!(row < self.rows, "row {row} is outside the grid");
        let width = self.cols;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..row * width, width);
        self.cells[..width].fill(None);
    }

    pub fn top_row_occupied_any(&self) -> bool {
        self.row(0).iter().any(Option::is_some)
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Empty every cell.
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_ROWS, GRID_COLS)
    }
}
