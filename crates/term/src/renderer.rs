//! TerminalRenderer: owns the terminal session and shows framebuffers.
//!
//! The game screen changes a few rows per frame (the falling piece, a
//! cleared line, the line counter), so the unit of redraw is a whole row:
//! a row identical to what is on screen is skipped, any other row is
//! rewritten from column 0. The first frame and every resize clear the
//! screen and write all rows.
//!
//! Raw mode and the alternate screen are entered by
//! [`TerminalRenderer::enter`] and restored when the renderer is dropped.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// What the terminal currently shows; `None` until the first frame.
    shown: Option<FrameBuffer>,
    out: Vec<u8>,
}

impl TerminalRenderer {
    /// Switch the terminal to raw mode on the alternate screen.
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("cannot enable raw mode")?;
        let mut renderer = Self {
            stdout: io::stdout(),
            shown: None,
            out: Vec::with_capacity(16 * 1024),
        };
        renderer
            .out
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        renderer.flush()?;
        Ok(renderer)
    }

    /// Bring the terminal up to date with `fb`.
    pub fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.out.clear();
        let rows = encode_frame(self.shown.as_ref(), fb, &mut self.out)?;
        if rows > 0 {
            self.flush()?;
        }
        match &mut self.shown {
            Some(shown) => shown.clone_from(fb),
            None => self.shown = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()
    }

    fn restore(&mut self) -> io::Result<()> {
        self.out.clear();
        self.out
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        // Nothing useful can be done if the terminal refuses to reset.
        let _ = self.restore();
    }
}

/// Append the commands that turn `shown` into `next` and return how many
/// rows were written.
///
/// `shown` of a different size is treated like a blank terminal.
pub fn encode_frame(
    shown: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> io::Result<usize> {
    let shown = shown.filter(|s| s.width() == next.width() && s.height() == next.height());
    if shown.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen = Pen::default();
    let mut rows = 0;
    for y in 0..next.height() {
        let row = next.row(y);
        if shown.is_some_and(|s| s.row(y) == row) {
            continue;
        }
        out.queue(cursor::MoveTo(0, y))?;
        for cell in row {
            pen.set(out, cell.style)?;
            out.queue(Print(cell.ch))?;
        }
        rows += 1;
    }

    if rows > 0 {
        out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(rows)
}

/// Tracks the terminal's current style so unchanged attributes are not
/// re-sent for every glyph.
#[derive(Default)]
struct Pen {
    current: Option<CellStyle>,
}

impl Pen {
    fn set(&mut self, out: &mut Vec<u8>, style: CellStyle) -> io::Result<()> {
        if self.current == Some(style) {
            return Ok(());
        }
        if self.current.map(|c| c.bold) != Some(style.bold) {
            let weight = if style.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            out.queue(SetAttribute(weight))?;
        }
        out.queue(SetColors(Colors::new(style.fg.into(), style.bg.into())))?;
        self.current = Some(style);
        Ok(())
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    fn frame(rows: &[&str]) -> FrameBuffer {
        let width = rows[0].chars().count() as u16;
        let mut fb = FrameBuffer::new(width, rows.len() as u16);
        for (y, text) in rows.iter().enumerate() {
            fb.print(0, y as u16, text, CellStyle::default());
        }
        fb
    }

    #[test]
    fn first_frame_writes_every_row() {
        let fb = frame(&["ab", "cd", "ef"]);
        let mut out = Vec::new();
        assert_eq!(encode_frame(None, &fb, &mut out).unwrap(), 3);

        let text = String::from_utf8_lossy(&out);
        for ch in ['a', 'b', 'c', 'd', 'e', 'f'] {
            assert!(text.contains(ch), "missing {}", ch);
        }
    }

    #[test]
    fn unchanged_frame_writes_nothing() {
        let fb = frame(&["ab", "cd"]);
        let mut out = Vec::new();
        assert_eq!(encode_frame(Some(&fb), &fb, &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn only_changed_rows_are_rewritten() {
        let shown = frame(&["abc", "def", "ghi"]);
        let mut next = shown.clone();
        next.put_char(2, 1, 'X', CellStyle::default());

        let mut out = Vec::new();
        assert_eq!(encode_frame(Some(&shown), &next, &mut out).unwrap(), 1);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("deX"));
        assert!(!text.contains('a'));
        assert!(!text.contains('g'));
    }

    #[test]
    fn style_change_alone_rewrites_the_row() {
        let shown = frame(&["ab"]);
        let mut next = shown.clone();
        let bold = CellStyle::default().bold();
        next.set(0, 0, Cell { ch: 'a', style: bold });

        let mut out = Vec::new();
        assert_eq!(encode_frame(Some(&shown), &next, &mut out).unwrap(), 1);
    }

    #[test]
    fn size_change_redraws_everything() {
        let shown = frame(&["ab", "cd"]);
        let next = frame(&["abc", "def"]);
        let mut out = Vec::new();
        assert_eq!(encode_frame(Some(&shown), &next, &mut out).unwrap(), 2);
    }

    #[test]
    fn pen_skips_repeated_styles() {
        let mut pen = Pen::default();
        let mut out = Vec::new();
        pen.set(&mut out, CellStyle::default()).unwrap();
        let after_first = out.len();
        assert!(after_first > 0);

        pen.set(&mut out, CellStyle::default()).unwrap();
        assert_eq!(out.len(), after_first);
    }

    #[test]
    fn rgb_converts_to_true_color() {
        assert_eq!(
            Color::from(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
