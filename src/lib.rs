//! twin-tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under short paths
//! (`twin_tetris::{core,input,term,types}`) and owns the command-line config.

pub mod config;

pub use twin_tetris_core as core;
pub use twin_tetris_input as input;
pub use twin_tetris_term as term;
pub use twin_tetris_types as types;
