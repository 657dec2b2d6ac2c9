//! The active falling piece.

use crate::shape::Shape;
use crate::types::ShapeKind;

/// A shape placed on the board at an offset.
///
/// `(x, y)` is the board position of the shape's top-left local cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// A piece of `kind` in its spawn orientation at `(x, y)`
    pub fn new(kind: ShapeKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            shape: Shape::template(kind),
            x,
            y,
        }
    }

    pub fn color_id(&self) -> u8 {
        self.kind.color_id()
    }

    /// The shape rotated 90° clockwise. Does not touch `self` and does not
    /// check for collisions.
    pub fn rotated(&self) -> Shape {
        self.shape.rotated()
    }

    /// Absolute board coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}
