//! Terminal input module.
//!
//! This crate is independent of the game rules. It maps `crossterm` key events
//! into [`crate::types::GameAction`]s and drains the pending events once per frame
//! without blocking. Quitting is reported separately from game actions.

pub mod frame;
pub mod map;

pub use twin_tetris_types as types;

pub use frame::{drain_pending, FrameInput};
pub use map::{handle_key_event, should_quit};
