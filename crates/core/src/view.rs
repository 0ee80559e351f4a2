//! Presentation collaborators the controller reports to.
//!
//! The core never draws anything itself. After each state change it hands
//! the grid and the active piece to a [`Renderer`] and pushes score changes
//! to a [`ScoreDisplay`]; how they end up on screen is up to the implementor.

use crate::grid::Grid;
use crate::pieces::Piece;

pub trait Renderer {
    /// Draw the locked cells. Always called first in a frame.
    fn render_grid(&mut self, grid: &Grid);

    /// Draw the active piece over the grid.
    fn render_piece(&mut self, piece: &Piece);

    /// Draw the terminal "GAME OVER" indication.
    fn render_game_over(&mut self);

    /// Draw the paused indication.
    fn render_paused(&mut self) {}

    /// The frame is complete.
    fn present(&mut self) {}
}

pub trait ScoreDisplay {
    fn set_score(&mut self, score: u32);
}

/// Headless view: discards everything.
impl Renderer for () {
    fn render_grid(&mut self, _grid: &Grid) {}
    fn render_piece(&mut self, _piece: &Piece) {}
    fn render_game_over(&mut self) {}
}

impl ScoreDisplay for () {
    fn set_score(&mut self, _score: u32) {}
}
