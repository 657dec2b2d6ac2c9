//! Non-blocking event drain for the host loop.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::map::map_key_event;
use crate::types::Command;

/// Append every command the terminal has already queued to `out`, in
/// arrival order. Returns without waiting when nothing is pending.
///
/// Only key presses count; auto-repeat and release events are skipped.
pub fn drain_pending(out: &mut Vec<Command>) -> io::Result<()> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(command) = map_key_event(key) {
                out.push(command);
            }
        }
    }
    Ok(())
}
