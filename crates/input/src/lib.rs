//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s and drains
//! whatever the terminal has queued without blocking the frame loop.

pub mod map;
pub mod source;

pub use blockfall_types as types;

pub use map::{map_key_event, should_quit};
pub use source::drain_pending;
