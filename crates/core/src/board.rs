//! Board module - the locked-cell map and its dense projection
//!
//! Locked cells are stored sparsely as `(x, y) -> PieceKind`. Coordinates: x ranges
//! 0..9 (left to right), y ranges 0..19 (top to bottom); y may be negative for a cell
//! locked above the visible board. The dense grid is derived on demand and is only a
//! projection for rendering and row scans.

use std::collections::HashMap;

use arrayvec::ArrayVec;

use crate::collision;
use crate::shapes::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Board coordinate (x, y)
pub type Coord = (i8, i8);

/// Dense `BOARD_HEIGHT x BOARD_WIDTH` view, indexed `grid[y][x]`
pub type Grid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Row indices removed by one clear, bottom to top
pub type ClearedRows = ArrayVec<i8, { BOARD_HEIGHT as usize }>;

/// Sparse map of locked cells
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    locked: HashMap<Coord, PieceKind>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            locked: HashMap::new(),
        }
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Locked kind at (x, y), if any
    pub fn get(&self, x: i8, y: i8) -> Option<PieceKind> {
        self.locked.get(&(x, y)).copied()
    }

    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.locked.contains_key(&(x, y))
    }

    /// Lock a single cell, returning the kind it replaced
    pub fn set(&mut self, x: i8, y: i8, kind: PieceKind) -> Option<PieceKind> {
        self.locked.insert((x, y), kind)
    }

    /// Number of locked cells
    pub fn len(&self) -> usize {
        self.locked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locked.is_empty()
    }

    /// Test a shape placement against the walls, floor, and locked cells
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        collision::collides(shape, x, y, self)
    }

    /// Commit every filled cell of a shape at (x, y).
    ///
    /// Returns the number of cells that were not already locked.
    pub fn lock_piece(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) -> usize {
        let mut added = 0;
        for (dx, dy) in shape.cells() {
            if self.set(x + dx, y + dy, kind).is_none() {
                added += 1;
            }
        }
        added
    }

    /// Write the dense projection into `out` (cells above the board are skipped).
    pub fn write_grid(&self, out: &mut Grid) {
        *out = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (&(x, y), &kind) in &self.locked {
            if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                out[y as usize][x as usize] = Some(kind);
            }
        }
    }

    /// Derive a fresh dense grid
    pub fn grid(&self) -> Grid {
        let mut grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.write_grid(&mut grid);
        grid
    }

    /// Full rows of the current grid, bottom to top
    pub fn full_rows(&self) -> ClearedRows {
        let grid = self.grid();
        (0..BOARD_HEIGHT as usize)
            .rev()
            .filter(|&y| grid[y].iter().all(Option::is_some))
            .map(|y| y as i8)
            .collect()
    }

    /// Remove all full rows and compact the cells above them.
    ///
    /// Full rows are collected from one fresh grid, then every surviving cell moves
    /// down by the number of cleared rows below it. The result matches clearing the
    /// rows one at a time from the bottom up.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let cleared = self.full_rows();
        if cleared.is_empty() {
            return cleared;
        }

        let old = std::mem::take(&mut self.locked);
        self.locked = old
            .into_iter()
            .filter(|&((_, y), _)| !cleared.contains(&y))
            .map(|((x, y), kind)| {
                let below = cleared.iter().filter(|&&row| row > y).count() as i8;
                ((x, y + below), kind)
            })
            .collect();

        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, PieceKind::I);
        }
    }

    #[test]
    fn grid_projection_skips_cells_above_board() {
        let mut board = Board::new();
        board.set(3, -1, PieceKind::S);
        board.set(3, 0, PieceKind::Z);

        let grid = board.grid();
        assert_eq!(grid[0][3], Some(PieceKind::Z));
        assert_eq!(grid.iter().flatten().filter(|c| c.is_some()).count(), 1);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn lock_piece_counts_new_cells() {
        let mut board = Board::new();
        let o = Shape::of(PieceKind::O);
        assert_eq!(board.lock_piece(&o, 0, 18, PieceKind::O), 4);
        assert_eq!(board.len(), 4);
        assert_eq!(board.get(1, 19), Some(PieceKind::O));
    }

    #[test]
    fn adjacent_full_rows_clear_together() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        fill_row(&mut board, 18);
        board.set(2, 17, PieceKind::T);
        board.set(7, 16, PieceKind::L);

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 18]);
        assert_eq!(board.len(), 2);
        assert_eq!(board.get(2, 19), Some(PieceKind::T));
        assert_eq!(board.get(7, 18), Some(PieceKind::L));
    }

    #[test]
    fn split_full_rows_shift_by_rows_below() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        board.set(0, 18, PieceKind::J);
        fill_row(&mut board, 17);
        board.set(4, 16, PieceKind::S);
        board.set(5, -1, PieceKind::Z);

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);
        assert_eq!(board.get(0, 19), Some(PieceKind::J));
        assert_eq!(board.get(4, 18), Some(PieceKind::S));
        assert_eq!(board.get(5, 1), Some(PieceKind::Z));
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn no_full_rows_leaves_board_untouched() {
        let mut board = Board::new();
        for x in 0..9 {
            board.set(x, 19, PieceKind::O);
        }
        let before = board.clone();
        assert!(board.clear_full_rows().is_empty());
        assert_eq!(board, before);
    }
}
