//! Collision engine - the single authority on whether a placement is legal
//!
//! Every move, rotation, drop, and spawn check goes through [`collides`].

use crate::board::Board;
use crate::shapes::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Test a shape placed with its top-left cell at `(offset_x, offset_y)`.
///
/// Returns true when any filled cell lands left of column 0, right of the last
/// column, below the last row, or on a locked cell. Cells above the board
/// (`y < 0`) are allowed and never hit locked cells.
pub fn collides(shape: &Shape, offset_x: i8, offset_y: i8, board: &Board) -> bool {
    shape.cells().any(|(dx, dy)| {
        let x = dx as i16 + offset_x as i16;
        let y = dy as i16 + offset_y as i16;
        if x < 0 || x >= BOARD_WIDTH as i16 || y >= BOARD_HEIGHT as i16 {
            return true;
        }
        y > -1 && board.is_occupied(x as i8, y as i8)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn empty_board_accepts_every_inside_placement() {
        let board = Board::new();
        for kind in PieceKind::ALL {
            let mut shape = Shape::of(kind);
            for _ in 0..4 {
                let max_x = (BOARD_WIDTH - shape.width()) as i8;
                let max_y = (BOARD_HEIGHT - shape.height()) as i8;
                for y in 0..=max_y {
                    for x in 0..=max_x {
                        assert!(!collides(&shape, x, y, &board), "{:?} at ({}, {})", kind, x, y);
                    }
                }
                shape = shape.rotated();
            }
        }
    }

    #[test]
    fn walls_and_floor_collide() {
        let board = Board::new();
        let o = Shape::of(PieceKind::O);
        assert!(collides(&o, -1, 5, &board));
        assert!(collides(&o, 9, 5, &board));
        assert!(collides(&o, 4, 19, &board));
        assert!(collides(&o, 0, 100, &board));
        assert!(collides(&o, i8::MIN, 0, &board));
        assert!(collides(&o, i8::MAX, 0, &board));
    }

    #[test]
    fn above_the_board_is_allowed() {
        let board = Board::new();
        let i = Shape::of(PieceKind::I).rotated();
        assert!(!collides(&i, 0, -3, &board));
        assert!(!collides(&i, 0, -40, &board));
    }

    #[test]
    fn locked_cells_collide() {
        let mut board = Board::new();
        board.set(5, 10, PieceKind::T);
        let o = Shape::of(PieceKind::O);
        assert!(collides(&o, 4, 9, &board));
        assert!(collides(&o, 5, 10, &board));
        assert!(!collides(&o, 6, 10, &board));
        assert!(!collides(&o, 5, 11, &board));
    }

    #[test]
    fn empty_matrix_cells_do_not_collide() {
        let mut board = Board::new();
        board.set(0, 0, PieceKind::I);
        // The T's top-left cell is empty, so it can sit over a locked cell.
        let t = Shape::of(PieceKind::T);
        assert!(!collides(&t, 0, 0, &board));
    }
}
