//! Board module - manages the game grid
//!
//! The board is a `cols x rows` grid where each cell is empty or holds the
//! kind of the piece that locked there. Storage is a flat row-major vector.
//! Coordinates: `(x, y)` with `x` in `0..cols` (left to right) and `y` in
//! `0..rows` (top to bottom).
//!
//! Collision checks have no top bound: cells above row 0 count as free, so a
//! shape may overhang the top edge while it is still inside the side walls.

use crate::error::ConfigError;
use crate::shape::Shape;
use crate::types::{Cell, ShapeKind, DEFAULT_COLS, DEFAULT_ROWS};

/// The locked-cell grid
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cols: usize,
    rows: usize,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Dimensions are fixed for the board's lifetime.
    pub fn new(cols: usize, rows: usize) -> Result<Self, ConfigError> {
        if cols == 0 || rows == 0 {
            return Err(ConfigError::ZeroDimension { cols, rows });
        }
        Ok(Self::empty(cols, rows))
    }

    fn empty(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![None; cols * rows],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.cols || y as usize >= self.rows {
            return None;
        }
        Some((y as usize) * self.cols + (x as usize))
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// One row of cells, left to right. Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Whether `shape` placed at `(x, y)` hits a wall, the floor, or a
    /// locked cell.
    pub fn collides(&self, shape: &Shape, x: i32, y: i32) -> bool {
        shape.occupied().any(|(dx, dy)| {
            let (px, py) = (x + dx, y + dy);
            if px < 0 || px as usize >= self.cols || (py >= 0 && py as usize >= self.rows) {
                return true;
            }
            // Above the top edge is open space.
            py >= 0 && self.is_occupied(px, py)
        })
    }

    /// Write `kind` into every occupied cell of `shape` at `(x, y)`.
    ///
    /// The caller must have checked [`Board::collides`]; overlapping cells are
    /// overwritten. Cells outside the grid are dropped.
    pub fn merge(&mut self, shape: &Shape, x: i32, y: i32, kind: ShapeKind) {
        for (dx, dy) in shape.occupied() {
            self.set(x + dx, y + dy, Some(kind));
        }
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Remaining rows keep their relative order and settle at the bottom;
    /// the same number of empty rows appear at the top.
    /// Uses a two-pointer pass from the bottom, without allocating.
    pub fn clear_lines(&mut self) -> usize {
        let width = self.cols;
        let mut write_y = self.rows;
        let mut cleared = 0;

        for read_y in (0..self.rows).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(None);

        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_COLS, DEFAULT_ROWS)
    }
}
