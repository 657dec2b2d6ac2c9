//! Snapshot module - the per-frame view handed to renderers
//!
//! A snapshot is plain owned data: renderers never borrow the live
//! [`GameState`](crate::GameState), and the host can keep one snapshot
//! and refill it every frame with
//! [`GameState::snapshot_into`](crate::GameState::snapshot_into).
//!
//! ```
//! use blockfall_core::{GameConfig, GameState, RenderSnapshot};
//!
//! let game = GameState::new(&GameConfig::default()).unwrap();
//! let mut snap = RenderSnapshot::default();
//! game.snapshot_into(&mut snap);
//!
//! assert_eq!(snap.board.len(), snap.cols * snap.rows);
//! assert!(snap.board.iter().all(|&id| id == 0));
//! assert_eq!(snap.active.map(|a| a.cells.len()), Some(4));
//! ```

use crate::types::ShapeKind;

/// The active piece as a renderer needs it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub color_id: u8,
    /// Absolute board coordinates. May include cells above row 0.
    pub cells: Vec<(i32, i32)>,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderSnapshot {
    pub cols: usize,
    pub rows: usize,
    /// Row-major color ids, 0 = empty
    pub board: Vec<u8>,
    /// `None` once the game is over
    pub active: Option<ActiveSnapshot>,
    pub game_over: bool,
    pub lines_cleared: u32,
    pub quit_requested: bool,
}

impl RenderSnapshot {
    /// Color id of a locked cell, 0 when empty or out of range
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        if x >= self.cols || y >= self.rows {
            return 0;
        }
        self.board[y * self.cols + x]
    }
}

impl Default for RenderSnapshot {
    fn default() -> Self {
        Self {
            cols: 0,
            rows: 0,
            board: Vec::new(),
            active: None,
            game_over: false,
            lines_cleared: 0,
            quit_requested: false,
        }
    }
}
