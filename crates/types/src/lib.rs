//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FPS` | 60 | Frame rate of the control loop |
//! | `BASE_FALL_MS` | 500 | Gravity interval at level 1 |
//! | `FALL_STEP_MS` | 50 | Interval reduction per level |
//! | `MIN_FALL_MS` | 50 | Gravity floor (20 cells per second) |
//!
//! # Examples
//!
//! ```
//! use twin_tetris_types::{PieceKind, Variant, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.color().r, 160);
//! assert_eq!(Variant::Simple.as_str(), "simple");
//! assert!(!Variant::Simple.holds());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Default frame rate of the control loop
pub const DEFAULT_FPS: u32 = 60;

/// Gravity interval at level 1 (500ms per row)
pub const BASE_FALL_MS: u32 = 500;

/// Gravity speed-up per level
pub const FALL_STEP_MS: u32 = 50;

/// Fastest gravity interval
pub const MIN_FALL_MS: u32 = 50;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Number of upcoming pieces shown in the preview
pub const NEXT_PREVIEW: usize = 3;

/// Line clear points at level 1, indexed by rows cleared in one placement.
///
/// Multiplied by the current level.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per cell for a manual one-row descend
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per cell fallen during a hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven piece kinds
///
/// Each kind is bound to exactly one color, independent of orientation:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Fixed display color of this kind
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0, 240, 240),
            PieceKind::O => Rgb::new(240, 240, 0),
            PieceKind::T => Rgb::new(160, 0, 240),
            PieceKind::J => Rgb::new(0, 0, 240),
            PieceKind::L => Rgb::new(240, 160, 0),
            PieceKind::S => Rgb::new(0, 240, 0),
            PieceKind::Z => Rgb::new(240, 0, 0),
        }
    }
}

/// Game actions delivered by the input source once per frame
///
/// Quitting is not a game action; the input layer reports it separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (1 point per cell in the extended variant)
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece to its lowest legal position and lock it
    HardDrop,
    /// Hold or swap the active piece (extended variant only)
    Hold,
}

/// Which rule set a session plays by
///
/// - **Simple**: uniform random pieces with replacement, no score, no hold,
///   no ghost, no preview.
/// - **Extended**: 7-bag randomizer, preview, hold, ghost, scoring and levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    Simple,
    #[default]
    Extended,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Simple => "simple",
            Variant::Extended => "extended",
        }
    }

    /// Score, lines, levels and drop bonuses are tracked
    pub fn scores(&self) -> bool {
        matches!(self, Variant::Extended)
    }

    /// Hold/swap is available
    pub fn holds(&self) -> bool {
        matches!(self, Variant::Extended)
    }

    /// Ghost projection and next-piece preview are shown
    pub fn shows_guides(&self) -> bool {
        matches!(self, Variant::Extended)
    }
}

/// A cell on the dense grid
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Locked cell of the given kind
pub type Cell = Option<PieceKind>;
