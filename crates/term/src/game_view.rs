//! GameView: paints controller output into a [`Canvas`].
//!
//! This module is pure (no I/O). It implements the core's [`Renderer`] and
//! [`ScoreDisplay`] collaborators so it can be unit-tested headless; the
//! terminal wrapper in [`crate::renderer`] flushes the canvas to a real screen.

use crate::canvas::{Canvas, Rgb, Style};
use crate::core::{Grid, Piece, Renderer, ScoreDisplay};
use crate::types::Color;

/// Terminal columns per board cell; 2x1 compensates for tall terminal glyphs.
pub const CELL_W: u16 = 2;

const PANEL_GAP: u16 = 2;
const PANEL_W: u16 = 14;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const EMPTY: Style = Style::new(Rgb::new(90, 90, 100), BOARD_BG);
const LABEL: Style = Style::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const HINT: Style = Style::new(Rgb::new(130, 130, 140), Rgb::new(0, 0, 0));

const KEY_HELP: [&str; 6] = [
    "<- ->  move",
    "down   drop",
    "s / f  rotate",
    "p      pause",
    "enter  start",
    "q      quit",
];

pub struct GameView {
    rows: u16,
    cols: u16,
    canvas: Canvas,
    score: u32,
}

impl GameView {
    /// A view for a `rows` x `cols` grid, showing the start prompt.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = u16::try_from(rows).unwrap_or(u16::MAX / 2);
        let cols = u16::try_from(cols).unwrap_or(u16::MAX / 4);
        let frame_w = cols * CELL_W + 2;
        let frame_h = rows + 2;
        let panel_h = 3 + KEY_HELP.len() as u16 + 1;

        let mut view = Self {
            rows,
            cols,
            canvas: Canvas::new(frame_w + PANEL_GAP + PANEL_W, frame_h.max(panel_h)),
            score: 0,
        };
        view.draw_frame();
        view.draw_empty_board();
        view.draw_panel();
        view.draw_overlay("PRESS ENTER", Style::new(Rgb::new(255, 255, 255), BOARD_BG).bold());
        view
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    fn frame_w(&self) -> u16 {
        self.cols * CELL_W + 2
    }

    fn frame_h(&self) -> u16 {
        self.rows + 2
    }

    fn draw_frame(&mut self) {
        let (w, h) = (self.frame_w(), self.frame_h());
        self.canvas.put(0, 0, '┌', BORDER);
        self.canvas.put(w - 1, 0, '┐', BORDER);
        self.canvas.put(0, h - 1, '└', BORDER);
        self.canvas.put(w - 1, h - 1, '┘', BORDER);
        self.canvas.fill(1, 0, w - 2, 1, '─', BORDER);
        self.canvas.fill(1, h - 1, w - 2, 1, '─', BORDER);
        self.canvas.fill(0, 1, 1, h - 2, '│', BORDER);
        self.canvas.fill(w - 1, 1, 1, h - 2, '│', BORDER);
    }

    fn draw_empty_board(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                self.draw_empty_cell(row, col);
            }
        }
    }

    fn draw_empty_cell(&mut self, row: u16, col: u16) {
        let x = 1 + col * CELL_W;
        self.canvas.fill(x, 1 + row, CELL_W, 1, ' ', EMPTY);
        self.canvas.put(x, 1 + row, '·', EMPTY);
    }

    fn draw_block(&mut self, row: i32, col: i32, color: Color) {
        let (Ok(row), Ok(col)) = (u16::try_from(row), u16::try_from(col)) else {
            return;
        };
        if row >= self.rows || col >= self.cols {
            return;
        }
        let style = Style::new(color_rgb(color), BOARD_BG);
        self.canvas.fill(1 + col * CELL_W, 1 + row, CELL_W, 1, '█', style);
    }

    fn draw_panel(&mut self) {
        let x = self.frame_w() + PANEL_GAP;
        self.canvas.text(x, 0, "SCORE", LABEL);
        self.draw_score_value();
        for (i, line) in KEY_HELP.iter().enumerate() {
            self.canvas.text(x, 3 + i as u16, line, HINT);
        }
    }

    fn draw_score_value(&mut self) {
        let x = self.frame_w() + PANEL_GAP;
        self.canvas.fill(x, 1, PANEL_W, 1, ' ', VALUE);
        self.canvas.text(x, 1, &self.score.to_string(), VALUE);
    }

    fn draw_overlay(&mut self, text: &str, style: Style) {
        let len = text.chars().count() as u16;
        let x = self.frame_w().saturating_sub(len) / 2;
        let y = self.frame_h() / 2;
        self.canvas.text(x, y, text, style);
    }
}

impl Renderer for GameView {
    fn render_grid(&mut self, grid: &Grid) {
        for (r, cells) in grid.iter_rows().enumerate() {
            for (c, cell) in cells.iter().enumerate() {
                match cell {
                    Some(color) => self.draw_block(r as i32, c as i32, *color),
                    None => self.draw_empty_cell(r as u16, c as u16),
                }
            }
        }
    }

    fn render_piece(&mut self, piece: &Piece) {
        for (row, col) in piece.cells() {
            self.draw_block(row, col, piece.color);
        }
    }

    fn render_game_over(&mut self) {
        self.draw_overlay("GAME OVER", Style::new(Rgb::new(255, 60, 60), BOARD_BG).bold());
    }

    fn render_paused(&mut self) {
        self.draw_overlay("PAUSED", Style::new(Rgb::new(255, 255, 255), BOARD_BG).bold());
    }
}

impl ScoreDisplay for GameView {
    fn set_score(&mut self, score: u32) {
        self.score = score;
        self.draw_score_value();
    }
}

/// Screen color for a color tag (CSS keyword values).
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::new(0, 255, 255),
        Color::Yellow => Rgb::new(255, 255, 0),
        Color::Purple => Rgb::new(128, 0, 128),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Blue => Rgb::new(0, 0, 255),
        Color::Green => Rgb::new(0, 128, 0),
        Color::Red => Rgb::new(255, 0, 0),
    }
}
