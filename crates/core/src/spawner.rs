//! Spawner - chooses the next piece and detects a blocked spawn.

use tracing::trace;

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::shape::Shape;
use crate::types::{ShapeKind, SHAPE_COUNT};

/// Uniform random piece source
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: SimpleRng,
}

impl Spawner {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Pick the next kind uniformly from all templates
    pub fn next_kind(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.rng.next_range(SHAPE_COUNT as u32) as usize]
    }

    /// Spawn the next piece centered at the top of `board`.
    ///
    /// The flag is true when the piece collides where it spawned, which
    /// means the game is over.
    pub fn spawn(&mut self, board: &Board) -> (Piece, bool) {
        let kind = self.next_kind();
        let piece = Piece::new(kind, spawn_x(board, &Shape::template(kind)), 0);
        let blocked = board.collides(&piece.shape, piece.x, piece.y);
        trace!(kind = kind.as_str(), x = piece.x, blocked, "spawned piece");
        (piece, blocked)
    }
}

/// `floor((cols - width) / 2)`, evaluated in signed arithmetic
pub fn spawn_x(board: &Board, shape: &Shape) -> i32 {
    (board.cols() as i32 - shape.width() as i32).div_euclid(2)
}
