//! Game configuration.

use crate::error::ConfigError;
use crate::shape::Shape;
use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, FALL_INTERVAL_MS, MAX_BOARD_SIDE};

/// Parameters fixed for the lifetime of a [`GameState`](crate::GameState).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub cols: usize,
    pub rows: usize,
    pub fall_interval_ms: u32,
    pub seed: u32,
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_size(mut self, cols: usize, rows: usize) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    pub fn with_fall_interval_ms(mut self, fall_interval_ms: u32) -> Self {
        self.fall_interval_ms = fall_interval_ms;
        self
    }

    /// Reject configurations the game cannot start with.
    ///
    /// Every template must fit horizontally, otherwise the spawn position
    /// would be outside the board and the game could never start.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(ConfigError::ZeroDimension {
                cols: self.cols,
                rows: self.rows,
            });
        }
        let min = Shape::max_template_width();
        if self.cols < min {
            return Err(ConfigError::BoardTooNarrow {
                cols: self.cols,
                min,
            });
        }
        if self.cols > MAX_BOARD_SIDE || self.rows > MAX_BOARD_SIDE {
            return Err(ConfigError::BoardTooLarge {
                cols: self.cols,
                rows: self.rows,
                max: MAX_BOARD_SIDE,
            });
        }
        if self.fall_interval_ms == 0 {
            return Err(ConfigError::ZeroFallInterval);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            fall_interval_ms: FALL_INTERVAL_MS,
            seed: 1,
        }
    }
}
