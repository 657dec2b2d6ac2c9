//! GameView: lays out one frame and paints a `RenderSnapshot` into a
//! framebuffer.
//!
//! Pure (no I/O). Layout is computed first as a set of rectangles, then each
//! part is painted into its rectangle. Board sizes whose well would not fit
//! in `u16` terminal coordinates are clamped, never wrapped.

use crate::core::RenderSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
use crate::types::ShapeKind;

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
const EMPTY: CellStyle = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG);
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
const GAME_OVER: CellStyle = CellStyle::new(Rgb::new(255, 60, 60), SCREEN_BG).bold();

const BLOCK_GLYPH: char = '█';
const EMPTY_GLYPH: char = '·';

/// Columns between the well and the side panel
const PANEL_GAP: u16 = 2;
/// Narrower panels are not drawn at all
const PANEL_MIN_W: u16 = 12;

const KEY_HELP: [&str; 4] = ["←/→  move", "↓    drop", "↑    rotate", "q    quit"];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen areas for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// The well including its border
    pub well: Rect,
    /// Line count and key help, when there is room for it
    pub panel: Option<Rect>,
}

#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Terminal columns per board cell
    cell_w: u16,
    /// Terminal rows per board cell
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keep blocks roughly square on most fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered well in terminal cells, clamped to `u16::MAX`.
    pub fn frame_size(&self, snap: &RenderSnapshot) -> (u16, u16) {
        (
            clamp_u16(snap.cols as u64 * self.cell_w as u64 + 2),
            clamp_u16(snap.rows as u64 * self.cell_h as u64 + 2),
        )
    }

    pub fn layout(&self, snap: &RenderSnapshot, viewport: Viewport) -> Layout {
        let (w, h) = self.frame_size(snap);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        let well = Rect::new(x, y, w, h);

        let panel_x = well.right().saturating_add(PANEL_GAP);
        let panel_w = viewport.width.saturating_sub(panel_x);
        let panel = (panel_w >= PANEL_MIN_W)
            .then(|| Rect::new(panel_x, y, panel_w, viewport.height.saturating_sub(y)));

        Layout { well, panel }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &RenderSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let layout = self.layout(snap, viewport);
        self.paint_well(fb, snap, layout.well);
        if let Some(panel) = layout.panel {
            paint_panel(fb, snap, panel);
        }
        if snap.game_over {
            paint_centered(fb, layout.well, "GAME OVER", GAME_OVER);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &RenderSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn paint_well(&self, fb: &mut FrameBuffer, snap: &RenderSnapshot, well: Rect) {
        let inside = well.inner();
        fb.fill(inside, ' ', EMPTY);
        fb.draw_box(well, BORDER);

        // Only the cells that can land on screen are visited.
        let visible_cols = snap.cols.min(fb.width() as usize);
        let visible_rows = snap.rows.min(fb.height() as usize);
        for y in 0..visible_rows {
            for x in 0..visible_cols {
                let Some(rect) = self.cell_rect(inside, x, y) else {
                    continue;
                };
                match ShapeKind::from_color_id(snap.cell(x, y)) {
                    Some(kind) => fb.fill(rect, BLOCK_GLYPH, block_style(kind)),
                    None => fb.fill(rect, EMPTY_GLYPH, EMPTY),
                }
            }
        }

        // Cells above the top edge stay hidden.
        if let Some(active) = &snap.active {
            let style = block_style(active.kind);
            for &(x, y) in &active.cells {
                let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
                    continue;
                };
                if x >= snap.cols || y >= snap.rows {
                    continue;
                }
                if let Some(rect) = self.cell_rect(inside, x, y) {
                    fb.fill(rect, BLOCK_GLYPH, style);
                }
            }
        }
    }

    /// Screen area of board cell `(x, y)`, or `None` past `u16` range.
    fn cell_rect(&self, inside: Rect, x: usize, y: usize) -> Option<Rect> {
        let px = u16::try_from(x)
            .ok()?
            .checked_mul(self.cell_w)?
            .checked_add(inside.x)?;
        let py = u16::try_from(y)
            .ok()?
            .checked_mul(self.cell_h)?
            .checked_add(inside.y)?;
        Some(Rect::new(px, py, self.cell_w, self.cell_h))
    }
}

fn paint_panel(fb: &mut FrameBuffer, snap: &RenderSnapshot, panel: Rect) {
    let x = panel.x;
    let mut y = panel.y;
    fb.print(x, y, "LINES", LABEL);
    y = y.saturating_add(1);
    fb.print(x, y, &snap.lines_cleared.to_string(), VALUE);

    y = y.saturating_add(2);
    fb.print(x, y, "KEYS", LABEL);
    for line in KEY_HELP {
        y = y.saturating_add(1);
        if y >= panel.bottom() {
            break;
        }
        fb.print(x, y, line, VALUE);
    }
}

fn paint_centered(fb: &mut FrameBuffer, area: Rect, text: &str, style: CellStyle) {
    let len = clamp_u16(text.chars().count() as u64);
    let x = area.x.saturating_add(area.w.saturating_sub(len) / 2);
    let y = area.y.saturating_add(area.h / 2);
    fb.print(x, y, text, style);
}

fn block_style(kind: ShapeKind) -> CellStyle {
    CellStyle::new(kind_color(kind), WELL_BG).bold()
}

fn clamp_u16(value: u64) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Block color per kind.
pub fn kind_color(kind: ShapeKind) -> Rgb {
    match kind {
        ShapeKind::I => Rgb::new(0, 255, 255),
        ShapeKind::J => Rgb::new(0, 0, 255),
        ShapeKind::L => Rgb::new(255, 165, 0),
        ShapeKind::O => Rgb::new(255, 255, 0),
        ShapeKind::S => Rgb::new(0, 255, 0),
        ShapeKind::T => Rgb::new(128, 0, 128),
        ShapeKind::Z => Rgb::new(255, 0, 0),
    }
}
