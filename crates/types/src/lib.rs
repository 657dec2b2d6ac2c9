//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no external dependencies, so the same
//! types flow through the core state machine, the input mapper and the
//! terminal renderer.
//!
//! # Board Dimensions
//!
//! The default well is 10 columns by 20 rows. Coordinates are `(x, y)` with
//! `x` growing to the right and `y` growing downward; row 0 is the top.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_INTERVAL_MS` | 500 | Gravity moves the piece down once this much time has passed |
//! | `FRAME_MS` | 16 | Host loop frame budget (~60 iterations per second) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{cell_color_id, ShapeKind, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! assert_eq!(ShapeKind::T.color_id(), 6);
//! assert_eq!(cell_color_id(Some(ShapeKind::T)), 6);
//! assert_eq!(cell_color_id(None), 0);
//!
//! assert_eq!(DEFAULT_COLS, 10);
//! assert_eq!(DEFAULT_ROWS, 20);
//! ```

/// Default board width in cells
pub const DEFAULT_COLS: usize = 10;

/// Default board height in cells
pub const DEFAULT_ROWS: usize = 20;

/// Gravity interval in milliseconds
pub const FALL_INTERVAL_MS: u32 = 500;

/// Host loop frame budget in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Largest accepted board side, in cells. Keeps the rendered well within
/// the `u16` coordinates a terminal uses.
pub const MAX_BOARD_SIDE: usize = 1024;

/// Number of shape templates
pub const SHAPE_COUNT: usize = 7;

/// The seven shape templates.
///
/// Declaration order is significant: a kind's color id is its position in
/// [`ShapeKind::ALL`] plus one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    /// All kinds in color-id order
    pub const ALL: [ShapeKind; SHAPE_COUNT] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Color identifier in `1..=SHAPE_COUNT`. Zero is reserved for empty cells.
    pub fn color_id(&self) -> u8 {
        match self {
            ShapeKind::I => 1,
            ShapeKind::J => 2,
            ShapeKind::L => 3,
            ShapeKind::O => 4,
            ShapeKind::S => 5,
            ShapeKind::T => 6,
            ShapeKind::Z => 7,
        }
    }

    /// Inverse of [`ShapeKind::color_id`]
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_color_id(1), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_color_id(0), None);
    /// assert_eq!(ShapeKind::from_color_id(8), None);
    /// ```
    pub fn from_color_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Short lowercase name, used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
            ShapeKind::O => "o",
            ShapeKind::S => "s",
            ShapeKind::T => "t",
            ShapeKind::Z => "z",
        }
    }
}

/// Discrete player commands consumed by the game loop.
///
/// Commands are processed in arrival order. Movement and rotation that would
/// collide are silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Ask the host to stop
    Quit,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(ShapeKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<ShapeKind>;

/// Flatten a cell into its color id (0 = empty).
pub fn cell_color_id(cell: Cell) -> u8 {
    cell.map_or(0, |kind| kind.color_id())
}
