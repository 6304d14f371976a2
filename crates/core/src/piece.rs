//! Piece module - a positioned, rotatable shape
//!
//! The origin (x, y) is the board coordinate of the shape matrix's top-left cell.
//! A piece never changes position or orientation without first asking the board
//! whether the result collides.

use crate::board::Board;
use crate::shapes::Shape;
use crate::types::{PieceKind, Rgb, BOARD_WIDTH};

/// Active (or held) piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Spawn a piece in its canonical orientation, centered at the top
    pub fn new(kind: PieceKind) -> Self {
        Self::with_shape(kind, Shape::of(kind))
    }

    /// Spawn a piece keeping a given orientation, centered at the top
    pub fn with_shape(kind: PieceKind, shape: Shape) -> Self {
        Self {
            kind,
            shape,
            x: spawn_x(&shape),
            y: 0,
        }
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Board coordinates of the filled cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Whether the piece overlaps walls, floor, or locked cells where it stands
    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y)
    }

    pub fn can_move(&self, dx: i8, dy: i8, board: &Board) -> bool {
        !board.collides(&self.shape, self.x + dx, self.y + dy)
    }

    /// Shift by (dx, dy) if the destination is free
    pub fn try_move(&mut self, dx: i8, dy: i8, board: &Board) -> bool {
        if !self.can_move(dx, dy, board) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Rotate clockwise in place; rejected without any offset search if it collides
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let rotated = self.shape.rotated();
        if board.collides(&rotated, self.x, self.y) {
            return false;
        }
        self.shape = rotated;
        true
    }

    /// Rows the piece can fall before it rests on something
    pub fn drop_distance(&self, board: &Board) -> u8 {
        let mut distance: u8 = 0;
        while !board.collides(&self.shape, self.x, self.y + distance as i8 + 1) {
            distance += 1;
        }
        distance
    }

    /// Where the piece would land if hard-dropped now
    pub fn ghost(&self, board: &Board) -> Piece {
        Piece {
            y: self.y + self.drop_distance(board) as i8,
            ..*self
        }
    }
}

/// Column that centers a shape: `COLS / 2 - width / 2`
pub fn spawn_x(shape: &Shape) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8
}
