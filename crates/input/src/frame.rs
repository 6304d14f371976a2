//! Per-frame input collection.
//!
//! The control loop asks for everything the terminal delivered since the last
//! frame. The first poll may wait (that wait doubles as frame pacing); every
//! following poll is non-blocking, so a frame never stalls on input.

use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::GameAction;

/// Actions beyond this many in one frame are dropped.
pub const MAX_ACTIONS_PER_FRAME: usize = 32;

/// Input gathered during one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Game actions in arrival order
    pub actions: ArrayVec<GameAction, MAX_ACTIONS_PER_FRAME>,
    pub quit: bool,
    /// The terminal was resized; the next draw should be a full redraw
    pub resized: bool,
}

impl FrameInput {
    /// Fold one terminal event into this frame's input.
    ///
    /// Key presses and terminal auto-repeats both act; releases are ignored.
    pub fn push_event(&mut self, ev: Event) {
        match ev {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    return;
                }
                if should_quit(key) {
                    self.quit = true;
                    return;
                }
                if let Some(action) = handle_key_event(key) {
                    let _ = self.actions.try_push(action);
                }
            }
            Event::Resize(_, _) => self.resized = true,
            _ => {}
        }
    }
}

/// Drain pending terminal events, waiting at most `wait` for the first one.
pub fn drain_pending(wait: Duration) -> Result<FrameInput> {
    let mut input = FrameInput::default();
    let mut timeout = wait;

    while event::poll(timeout)? {
        input.push_event(event::read()?);
        if input.quit {
            break;
        }
        timeout = Duration::ZERO;
    }

    Ok(input)
}
