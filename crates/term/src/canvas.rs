//! Character-cell canvas the board view paints into.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Style {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// One styled character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

/// Fixed-size grid of glyphs. Writes outside the canvas are clipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn glyph(&self, x: u16, y: u16) -> Option<Glyph> {
        self.offset(x, y).map(|i| self.glyphs[i])
    }

    pub fn put(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if let Some(i) = self.offset(x, y) {
            self.glyphs[i] = Glyph { ch, style };
        }
    }

    /// Write `text` left to right starting at `(x, y)`.
    pub fn text(&mut self, x: u16, y: u16, text: &str, style: Style) {
        for (dx, ch) in text.chars().enumerate() {
            let Ok(dx) = u16::try_from(dx) else {
                break;
            };
            self.put(x.saturating_add(dx), y, ch, style);
        }
    }

    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: Style) {
        for row in y..y.saturating_add(h) {
            for col in x..x.saturating_add(w) {
                self.put(col, row, ch, style);
            }
        }
    }

    /// The characters of row `y`, without styling.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.glyph(x, y))
            .map(|g| g.ch)
            .collect()
    }

    /// Horizontal runs `(x, y, len)` where `self` differs from `prev`.
    ///
    /// A canvas of different size is reported as entirely changed.
    pub fn changed_runs(&self, prev: &Canvas) -> Vec<(u16, u16, u16)> {
        if prev.width != self.width || prev.height != self.height {
            return (0..self.height).map(|y| (0, y, self.width)).collect();
        }

        let mut runs = Vec::new();
        for y in 0..self.height {
            let mut run_start: Option<u16> = None;
            for x in 0..self.width {
                let changed = self.glyph(x, y) != prev.glyph(x, y);
                match (changed, run_start) {
                    (true, None) => run_start = Some(x),
                    (false, Some(start)) => {
                        runs.push((start, y, x - start));
                        run_start = None;
                    }
                    _ => {}
                }
            }
            if let Some(start) = run_start {
                runs.push((start, y, self.width - start));
            }
        }
        runs
    }
}
