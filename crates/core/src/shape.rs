//! Shape module - boolean occupancy matrices and rotation
//!
//! A shape is stored row-major with its own width and height. Local
//! coordinates are `(x, y)` with `(0, 0)` at the top-left of the bounding
//! box. Pieces carry a shape plus an offset; rotating a piece replaces its
//! shape and keeps the offset, so there is no pivot and no wall kick.

use crate::types::ShapeKind;

/// An immutable occupancy matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Shape {
    /// Build a shape from rows of `0`/`1`.
    ///
    /// Panics if the rows are empty or ragged; templates are static and
    /// tests construct shapes by hand, so this is a programming error.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty(), "shape needs at least one row");
        let width = rows[0].len();
        assert!(width > 0, "shape needs at least one column");
        assert!(
            rows.iter().all(|row| row.len() == width),
            "shape rows must have equal length"
        );

        let cells = rows
            .iter()
            .flat_map(|row| row.iter().map(|&v| v != 0))
            .collect();
        Self {
            width,
            height: rows.len(),
            cells,
        }
    }

    /// The spawn orientation of a kind
    pub fn template(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::I => Self::from_rows(&[&[1, 1, 1, 1]]),
            ShapeKind::J => Self::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
            ShapeKind::L => Self::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
            ShapeKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            ShapeKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            ShapeKind::T => Self::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            ShapeKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        }
    }

    /// Width of the widest template in its spawn orientation
    pub fn max_template_width() -> usize {
        ShapeKind::ALL
            .iter()
            .map(|&kind| Self::template(kind).width())
            .max()
            .unwrap_or(0)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the local cell is occupied. Out of range is empty.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    /// Local coordinates of every occupied cell, row by row
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &filled)| filled)
            .map(move |(i, _)| ((i % width) as i32, (i / width) as i32))
    }

    /// Rotate 90° clockwise.
    ///
    /// This is the transpose of the row-reversed matrix: the bottom row
    /// becomes the left column. Width and height swap.
    pub fn rotated(&self) -> Shape {
        let (w, h) = (self.width, self.height);
        let mut cells = vec![false; w * h];
        // new[r][c] = old[h - 1 - c][r], with the new matrix being h wide
        for r in 0..w {
            for c in 0..h {
                cells[r * h + c] = self.cells[(h - 1 - c) * w + r];
            }
        }
        Shape {
            width: h,
            height: w,
            cells,
        }
    }
}
