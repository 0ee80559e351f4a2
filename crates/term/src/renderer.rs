//! TerminalRenderer: flushes a canvas to a real terminal.
//!
//! Frames are diffed against the last flushed canvas so only changed runs
//! of cells are rewritten.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::canvas::{Canvas, Rgb, Style};
use crate::core::{Grid, Piece, Renderer, ScoreDisplay};
use crate::game_view::GameView;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Canvas>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.last = None;
        Ok(())
    }

    /// Restore the terminal to its normal state.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw `canvas`, rewriting only what changed since the previous draw.
    pub fn draw(&mut self, canvas: &Canvas) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) => encode_diff_into(prev, canvas, &mut self.buf)?,
            None => encode_full_into(canvas, &mut self.buf)?,
        }
        self.flush_buf()?;
        self.last = Some(canvas.clone());
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(canvas: &Canvas, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let runs: Vec<_> = (0..canvas.height()).map(|y| (0, y, canvas.width())).collect();
    encode_runs(canvas, &runs, out)
}

/// Encode the runs where `next` differs from `prev` into `out`.
pub fn encode_diff_into(prev: &Canvas, next: &Canvas, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }
    encode_runs(next, &next.changed_runs(prev), out)
}

fn encode_runs(canvas: &Canvas, runs: &[(u16, u16, u16)], out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<Style> = None;
    for &(x, y, len) in runs {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let glyph = canvas.glyph(x + dx, y).unwrap_or_default();
            if current != Some(glyph.style) {
                apply_style_into(out, glyph.style)?;
                current = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(if style.bold {
        Attribute::Bold
    } else {
        Attribute::NormalIntensity
    }))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> TermColor {
    TermColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// A [`GameView`] that is flushed to the terminal at the end of every frame.
pub struct TerminalView {
    view: GameView,
    terminal: TerminalRenderer,
}

impl TerminalView {
    pub fn new(view: GameView) -> Self {
        Self {
            view,
            terminal: TerminalRenderer::new(),
        }
    }

    /// Take over the terminal and show the current canvas (the start prompt for a fresh view).
    pub fn enter(&mut self) -> Result<()> {
        self.terminal.enter()?;
        self.terminal.draw(self.view.canvas())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.terminal.exit()
    }

    pub fn view(&self) -> &GameView {
        &self.view
    }
}

impl Renderer for TerminalView {
    fn render_grid(&mut self, grid: &Grid) {
        self.view.render_grid(grid);
    }

    fn render_piece(&mut self, piece: &Piece) {
        self.view.render_piece(piece);
    }

    fn render_game_over(&mut self) {
        self.view.render_game_over();
    }

    fn render_paused(&mut self) {
        self.view.render_paused();
    }

    fn present(&mut self) {
        if let Err(err) = self.terminal.draw(self.view.canvas()) {
            tracing::warn!(error = %err, "failed to draw frame");
        }
    }
}

impl ScoreDisplay for TerminalView {
    fn set_score(&mut self, score: u32) {
        self.view.set_score(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_maps_to_truecolor() {
        assert_eq!(
            rgb_to_color(Rgb::new(1, 2, 3)),
            TermColor::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn identical_frames_encode_only_resets() {
        let canvas = Canvas::new(4, 2);
        let mut diff = Vec::new();
        encode_diff_into(&canvas, &canvas, &mut diff).unwrap();

        let mut full = Vec::new();
        encode_full_into(&canvas, &mut full).unwrap();

        assert!(!diff.is_empty());
        assert!(diff.len() < full.len());
    }

    #[test]
    fn terminal_view_paints_into_its_game_view() {
        use crate::types::TetrominoKind;

        // No `present()`: nothing is written to the real terminal.
        let mut view = TerminalView::new(GameView::new(20, 10));
        view.render_grid(&Grid::default());
        view.render_piece(&Piece::new(TetrominoKind::O));
        view.set_score(300);

        assert_eq!(view.view().score(), 300);
        assert!(view.view().canvas().row_text(1).contains('█'));
        assert!(view.view().canvas().row_text(1).contains("300"));
    }

    #[test]
    fn diff_contains_changed_text() {
        let prev = Canvas::new(8, 1);
        let mut next = prev.clone();
        next.text(2, 0, "GO", Style::default());

        let mut out = Vec::new();
        encode_diff_into(&prev, &next, &mut out).unwrap();
        let encoded = String::from_utf8_lossy(&out);
        assert!(encoded.contains('G'));
        assert!(encoded.contains('O'));
    }
}
