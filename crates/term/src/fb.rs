//! Character-cell canvas the game view draws into.
//!
//! Every write is clipped to the buffer, so callers can place text and
//! rectangles without checking the terminal size first.

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
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
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

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// One glyph and its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Axis-aligned area in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// First column past the right edge
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    /// First row past the bottom edge
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    /// The area left inside a one-cell border.
    pub fn inner(&self) -> Rect {
        Rect::new(
            self.x.saturating_add(1),
            self.y.saturating_add(1),
            self.w.saturating_sub(2),
            self.h.saturating_sub(2),
        )
    }
}

const BOX_TOP_LEFT: char = '┌';
const BOX_TOP_RIGHT: char = '┐';
const BOX_BOTTOM_LEFT: char = '└';
const BOX_BOTTOM_RIGHT: char = '┘';
const BOX_HORIZONTAL: char = '─';
const BOX_VERTICAL: char = '│';

/// Row-major grid of styled cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change the dimensions. Contents are unspecified afterwards; callers
    /// clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    /// One row of cells; empty when `y` is out of range.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.offset(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `text` left to right starting at `(x, y)` and return the
    /// column after the last glyph.
    pub fn print(&mut self, x: u16, y: u16, text: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in text.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
        cx
    }

    pub fn fill(&mut self, rect: Rect, ch: char, style: CellStyle) {
        let cell = Cell { ch, style };
        let (x_end, y_end) = (rect.right().min(self.width), rect.bottom().min(self.height));
        for y in rect.y..y_end {
            for x in rect.x..x_end {
                self.set(x, y, cell);
            }
        }
    }

    /// Draw a single-line box along the edges of `rect`.
    pub fn draw_box(&mut self, rect: Rect, style: CellStyle) {
        if rect.w < 2 || rect.h < 2 {
            return;
        }
        let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);

        for x in rect.x.saturating_add(1)..right {
            self.put_char(x, rect.y, BOX_HORIZONTAL, style);
            self.put_char(x, bottom, BOX_HORIZONTAL, style);
        }
        for y in rect.y.saturating_add(1)..bottom {
            self.put_char(rect.x, y, BOX_VERTICAL, style);
            self.put_char(right, y, BOX_VERTICAL, style);
        }
        self.put_char(rect.x, rect.y, BOX_TOP_LEFT, style);
        self.put_char(right, rect.y, BOX_TOP_RIGHT, style);
        self.put_char(rect.x, bottom, BOX_BOTTOM_LEFT, style);
        self.put_char(right, bottom, BOX_BOTTOM_RIGHT, style);
    }

    /// The characters of one row, mostly for assertions in tests.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|cell| cell.ch).collect()
    }
}
