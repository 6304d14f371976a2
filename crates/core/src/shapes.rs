//! Shape catalog - the seven piece shapes as boolean matrices
//!
//! A shape is a small rectangular matrix of filled/empty cells. Rotation is the
//! transpose of the reversed rows (90° clockwise); there is no pivot point and no
//! kick table, so a rotated shape keeps its top-left origin on the board.

use crate::types::PieceKind;

/// Largest side length of any shape matrix
pub const MAX_SHAPE_SIDE: usize = 4;

/// Rectangular boolean matrix of at most 4x4 cells.
///
/// Cells outside `rows x cols` are always empty, so structural equality compares
/// only the meaningful part of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

const fn matrix<const R: usize, const C: usize>(bits: [[u8; C]; R]) -> Shape {
    let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
    let mut r = 0;
    while r < R {
        let mut c = 0;
        while c < C {
            cells[r][c] = bits[r][c] != 0;
            c += 1;
        }
        r += 1;
    }
    Shape {
        rows: R as u8,
        cols: C as u8,
        cells,
    }
}

const I_SHAPE: Shape = matrix([[1, 1, 1, 1]]);
const O_SHAPE: Shape = matrix([[1, 1], [1, 1]]);
const T_SHAPE: Shape = matrix([[0, 1, 0], [1, 1, 1]]);
const J_SHAPE: Shape = matrix([[1, 0, 0], [1, 1, 1]]);
const L_SHAPE: Shape = matrix([[0, 0, 1], [1, 1, 1]]);
const S_SHAPE: Shape = matrix([[1, 1, 0], [0, 1, 1]]);
const Z_SHAPE: Shape = matrix([[0, 1, 1], [1, 1, 0]]);

impl Shape {
    /// Spawn orientation of a piece kind
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => I_SHAPE,
            PieceKind::O => O_SHAPE,
            PieceKind::T => T_SHAPE,
            PieceKind::J => J_SHAPE,
            PieceKind::L => L_SHAPE,
            PieceKind::S => S_SHAPE,
            PieceKind::Z => Z_SHAPE,
        }
    }

    /// Number of columns
    pub fn width(&self) -> u8 {
        self.cols
    }

    /// Number of rows
    pub fn height(&self) -> u8 {
        self.rows
    }

    pub fn is_filled(&self, x: u8, y: u8) -> bool {
        x < self.cols && y < self.rows && self.cells[y as usize][x as usize]
    }

    /// Filled cells as (x, y) offsets from the top-left corner, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows).flat_map(move |y| {
            (0..self.cols)
                .filter(move |&x| self.cells[y as usize][x as usize])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// Rotate 90° clockwise: transpose of the rows taken bottom to top.
    pub fn rotated(&self) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let rows = self.rows as usize;
        for (r, out_row) in cells.iter_mut().enumerate().take(self.cols as usize) {
            for (c, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - c][r];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_of(shape: &Shape) -> Vec<Vec<u8>> {
        (0..shape.height())
            .map(|y| {
                (0..shape.width())
                    .map(|x| shape.is_filled(x, y) as u8)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn catalog_has_four_cells_per_shape() {
        for kind in PieceKind::ALL {
            assert_eq!(Shape::of(kind).cells().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn catalog_dimensions() {
        assert_eq!((Shape::of(PieceKind::I).width(), Shape::of(PieceKind::I).height()), (4, 1));
        assert_eq!((Shape::of(PieceKind::O).width(), Shape::of(PieceKind::O).height()), (2, 2));
        for kind in [PieceKind::T, PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::Z] {
            assert_eq!(Shape::of(kind).width(), 3);
            assert_eq!(Shape::of(kind).height(), 2);
        }
    }

    #[test]
    fn t_rotates_clockwise() {
        let t = Shape::of(PieceKind::T).rotated();
        assert_eq!(rows_of(&t), vec![vec![1, 0], vec![1, 1], vec![1, 0]]);

        let t2 = t.rotated();
        assert_eq!(rows_of(&t2), vec![vec![1, 1, 1], vec![0, 1, 0]]);
    }

    #[test]
    fn i_rotates_to_a_column() {
        let i = Shape::of(PieceKind::I).rotated();
        assert_eq!(i.width(), 1);
        assert_eq!(i.height(), 4);
        assert_eq!(i.cells().collect::<Vec<_>>(), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn cells_are_row_major_offsets() {
        let s = Shape::of(PieceKind::S);
        assert_eq!(s.cells().collect::<Vec<_>>(), vec![(0, 0), (1, 0), (1, 1), (2, 1)]);
    }
}
