//! Construction errors.
//!
//! Gameplay itself never fails: blocked moves are no-ops and game over is a
//! state. Only malformed setup is reported, and it is reported before the
//! first frame.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {cols}x{rows}")]
    ZeroDimension { cols: usize, rows: usize },

    #[error("board is {cols} columns wide but the widest shape needs {min}")]
    BoardTooNarrow { cols: usize, min: usize },

    #[error("board is {cols}x{rows} but neither side may exceed {max}")]
    BoardTooLarge { cols: usize, rows: usize, max: usize },

    #[error("fall interval must be at least 1ms")]
    ZeroFallInterval,
}
