//! Game controller - owns the complete game state
//!
//! The controller ties together the grid, the active piece, the piece factory
//! and the tick timer. It is the only thing that mutates game state, and
//! every method runs to completion synchronously; callers are expected to
//! serialize timer ticks and player commands onto one thread of control.

use std::time::Duration;

use crate::grid::Grid;
use crate::lines::{clear_full_lines, merge};
use crate::pieces::{spawn_shape, Piece, PieceFactory};
use crate::placement::can_place;
use crate::timer::TickTimer;
use crate::types::{GameAction, RotateDirection, TetrominoKind, POINTS_PER_LINE, SPAWN_COL, SPAWN_ROW};
use crate::view::{Renderer, ScoreDisplay};

/// Lifecycle phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No game started yet
    Ready,
    Running,
    Paused,
    /// Terminal until the next `start()`
    GameOver,
}

pub struct Controller<V> {
    grid: Grid,
    active: Option<Piece>,
    factory: PieceFactory,
    score: u32,
    lines: u32,
    /// Monotonic count of spawned pieces in the current game.
    pieces_spawned: u32,
    phase: Phase,
    timer: TickTimer,
    view: V,
}

impl<V: Renderer + ScoreDisplay> Controller<V> {
    /// Create a controller with a standard 20x10 grid and a 1000 ms tick.
    pub fn new(factory: PieceFactory, view: V) -> Self {
        Self {
            grid: Grid::default(),
            active: None,
            factory,
            score: 0,
            lines: 0,
            pieces_spawned: 0,
            phase: Phase::Ready,
            timer: TickTimer::default(),
            view,
        }
    }

    /// Use a grid of different dimensions.
    ///
    /// # Panics
    ///
    /// If some piece would not fit at the spawn anchor.
    pub fn with_grid(mut self, grid: Grid) -> Self {
        let shapes = TetrominoKind::ALL.map(spawn_shape);
        let widest = shapes.iter().map(|s| s.width()).max().unwrap_or(0);
        let tallest = shapes.iter().map(|s| s.height()).max().unwrap_or(0);
        assert!(
            grid.cols() >= SPAWN_COL as usize + widest,
            "grid of {} columns is too narrow to spawn at column {SPAWN_COL}",
            grid.cols()
        );
        assert!(
            grid.rows() >= SPAWN_ROW as usize + tallest,
            "grid of {} rows is too short to spawn at row {SPAWN_ROW}",
            grid.rows()
        );
        self.grid = grid;
        self
    }

    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.timer = TickTimer::new(period);
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Rows cleared in the current game.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn tick_timer(&self) -> &TickTimer {
        &self.timer
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Start a new game, abandoning any game in progress.
    pub fn start(&mut self) {
        self.score = 0;
        self.lines = 0;
        self.pieces_spawned = 0;
        self.view.set_score(0);

        self.grid.reset();
        self.spawn_piece();
        self.phase = Phase::Running;
        self.timer.arm();

        tracing::info!(
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            tick_ms = self.timer.period().as_millis() as u64,
            "game started"
        );
        self.redraw();
    }

    /// Timer-driven descent. Same as [`Controller::descend`].
    pub fn tick(&mut self) -> bool {
        self.descend()
    }

    /// Move the active piece one row down, or lock it if it cannot move.
    ///
    /// Returns false when the game is not running.
    pub fn descend(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        if can_place(&piece.shape, piece.row + 1, piece.col, &self.grid) {
            piece.row += 1;
        } else {
            self.lock_piece();
        }

        if self.phase == Phase::Running {
            self.redraw();
        }
        true
    }

    /// Shift the active piece one column; `direction` is -1 (left) or +1 (right).
    ///
    /// Returns whether the piece moved.
    pub fn move_horizontal(&mut self, direction: i32) -> bool {
        debug_assert!(direction == -1 || direction == 1, "direction {direction}");
        if self.phase != Phase::Running {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        let col = piece.col + direction;
        if !can_place(&piece.shape, piece.row, col, &self.grid) {
            return false;
        }
        piece.col = col;
        self.redraw();
        true
    }

    /// Rotate the active piece in place. A rotation that does not fit is discarded.
    ///
    /// Returns whether the piece rotated.
    pub fn rotate(&mut self, direction: RotateDirection) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        let rotated = piece.shape.rotated(direction);
        if !can_place(&rotated, piece.row, piece.col, &self.grid) {
            return false;
        }
        piece.shape = rotated;
        self.redraw();
        true
    }

    /// Toggle between Running and Paused. No effect in any other phase.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::Paused;
                tracing::debug!("paused");
                self.draw_board();
                self.view.render_paused();
                self.view.present();
                true
            }
            Phase::Paused => {
                self.phase = Phase::Running;
                tracing::debug!("resumed");
                self.redraw();
                true
            }
            Phase::Ready | Phase::GameOver => false,
        }
    }

    /// Apply an input command
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => {
                self.start();
                true
            }
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::Descend => self.descend(),
            GameAction::RotateLeft => self.rotate(RotateDirection::CounterClockwise),
            GameAction::RotateRight => self.rotate(RotateDirection::Clockwise),
            GameAction::Pause => self.toggle_pause(),
        }
    }

    fn spawn_piece(&mut self) {
        self.active = Some(self.factory.spawn());
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
    }

    /// Merge the active piece, clear lines, spawn the next piece and check for game over.
    fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        merge(&piece, &mut self.grid);
        let cleared = clear_full_lines(&mut self.grid) as u32;
        tracing::debug!(
            kind = piece.kind.as_str(),
            row = piece.row,
            col = piece.col,
            cleared,
            "piece locked"
        );

        if cleared > 0 {
            self.lines += cleared;
            self.score = self.score.saturating_add(cleared * POINTS_PER_LINE);
            self.view.set_score(self.score);
        }

        self.spawn_piece();

        if self.grid.top_row_occupied_any() {
            self.game_over();
        }
    }

    fn game_over(&mut self) {
        self.phase = Phase::GameOver;
        self.timer.disarm();
        tracing::info!(
            score = self.score,
            lines = self.lines,
            pieces = self.pieces_spawned,
            "game over"
        );

        self.draw_board();
        self.view.render_game_over();
        self.view.present();
    }

    fn draw_board(&mut self) {
        self.view.render_grid(&self.grid);
        if let Some(piece) = &self.active {
            self.view.render_piece(piece);
        }
    }

    fn redraw(&mut self) {
        self.draw_board();
        self.view.present();
    }
}

impl<V> std::fmt::Debug for Controller<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("active", &self.active)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}
