//! Terminal front end: framebuffer, game view, terminal flushing and frame pacing.
//!
//! Rendering goes snapshot -> [`GameView`] -> [`FrameBuffer`] ->
//! [`TerminalRenderer`]. Only the last step performs I/O.

pub mod clock;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use twin_tetris_core as core;
pub use twin_tetris_types as types;

pub use clock::FrameClock;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
