//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and session state. It has no
//! dependencies on terminals, input devices, or clocks, making it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven shape matrices and clockwise rotation
//! - [`collision`]: the placement test every movement goes through
//! - [`board`]: sparse locked-cell map, dense grid projection, line clearing
//! - [`piece`]: positioned shape with move/rotate/drop
//! - [`randomizer`]: 7-bag and uniform piece selection
//! - [`scoring`]: line clear points, drop bonuses, levels, gravity
//! - [`game_state`]: one play session (gravity, actions, hold, top-out)
//! - [`snapshot`]: render-facing copy of a session
//!
//! # Variants
//!
//! - **Simple**: uniform random pieces, no score, no hold
//! - **Extended**: 7-bag, preview, hold, ghost, score and levels
//!
//! # Example
//!
//! ```
//! use twin_tetris_core::GameState;
//! use twin_tetris_types::{GameAction, Variant};
//!
//! let mut game = GameState::new(Variant::Extended, 12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. Gravity fires once the accumulated time reaches
//! 500ms at level 1, 50ms faster per level, never below 50ms.

pub mod board;
pub mod collision;
pub mod game_state;
pub mod piece;
pub mod randomizer;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use twin_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows, Coord, Grid};
pub use collision::collides;
pub use game_state::{GameState, LockEvent};
pub use piece::Piece;
pub use randomizer::{Bag, Preview, Randomizer, Uniform};
pub use scoring::{drop_score, fall_interval_ms, level_for_lines, line_clear_score};
pub use shapes::Shape;
pub use snapshot::GameSnapshot;
