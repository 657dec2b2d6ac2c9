//! Terminal front end for the game.
//!
//! [`GameView`] paints a [`core::RenderSnapshot`] into a [`FrameBuffer`];
//! [`TerminalRenderer`] shows framebuffers on the real terminal, rewriting
//! only the rows that changed since the previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
pub use game_view::{kind_color, AnchorY, GameView, Layout, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
