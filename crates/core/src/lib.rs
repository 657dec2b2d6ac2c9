//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the grid/piece state machine. It has no dependency on a
//! terminal, a clock or an input device, which makes it:
//!
//! - **Deterministic**: the same seed and command stream replay the same game
//! - **Testable**: every rule is reachable from plain function calls
//! - **Portable**: any host loop (terminal, GUI, headless harness) can drive it
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with collision checks, merging and line clears
//! - [`shape`]: occupancy matrices and clockwise rotation
//! - [`piece`]: the active piece (shape + offset)
//! - [`spawner`]: uniform random piece selection and blocked-spawn detection
//! - [`game_state`]: the game loop state machine (`Running` / `GameOver`)
//! - [`snapshot`]: per-frame data handed to renderers
//!
//! # Game Rules
//!
//! - Pieces spawn centered on row 0; a spawn that collides ends the game
//! - Left/right/down moves and clockwise rotation are applied only if the
//!   result does not collide; otherwise they are ignored
//! - No wall kicks, no hold, no preview, no scoring
//! - Gravity moves the piece down when the fall timer exceeds the interval;
//!   a blocked piece locks, full rows clear, the next piece spawns
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameState};
//! use blockfall_types::Command;
//!
//! let mut game = GameState::new(&GameConfig::default().with_seed(12345)).unwrap();
//!
//! let snap = game.tick(&[Command::MoveLeft, Command::Rotate], 16);
//! assert!(!snap.game_over);
//! assert_eq!(snap.board.len(), snap.cols * snap.rows);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod shape;
pub mod snapshot;
pub mod spawner;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use error::ConfigError;
pub use game_state::{GamePhase, GameState};
pub use piece::Piece;
pub use rng::SimpleRng;
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, RenderSnapshot};
pub use spawner::Spawner;
