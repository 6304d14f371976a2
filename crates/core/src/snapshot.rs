//! Render-facing copy of a session

use crate::board::Grid;
use crate::piece::Piece;
use crate::randomizer::Preview;
use crate::types::{PieceKind, Variant, BOARD_HEIGHT, BOARD_WIDTH};

/// Everything a renderer needs to draw one frame.
///
/// Built by [`GameState::snapshot_into`](crate::GameState::snapshot_into); the
/// view never touches the session itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub variant: Variant,
    pub grid: Grid,
    pub active: Piece,
    /// Landing projection, only in the extended variant
    pub ghost: Option<Piece>,
    pub hold: Option<Piece>,
    pub next_queue: Preview,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            grid: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: Piece::new(PieceKind::I),
            ghost: None,
            hold: None,
            next_queue: Preview::new(),
            score: 0,
            lines: 0,
            level: 1,
            game_over: false,
        }
    }
}
