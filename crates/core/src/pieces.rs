//! Pieces module - tetromino shape matrices and rotation
//!
//! Shapes are square matrices (2x2 for O, 4x4 for I, 3x3 otherwise) whose
//! non-zero entries hold the piece id. Rotation is a plain 90° clockwise
//! matrix rotation (transpose, then reverse each row) with no wall kicks.

use crate::types::PieceKind;

/// Largest matrix edge among the seven shapes
pub const MAX_SHAPE_SIZE: usize = 4;

/// Offset of a single mino relative to the shape origin, as (dx, dy)
pub type MinoOffset = (i8, i8);

/// Square shape matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Spawn orientation for a piece kind
    pub fn of(kind: PieceKind) -> Self {
        let v = kind.id();
        match kind {
            PieceKind::I => Self::from_rows(&[&[0, 0, 0, 0], &[v, v, v, v], &[0, 0, 0, 0], &[0, 0, 0, 0]]),
            PieceKind::J => Self::from_rows(&[&[v, 0, 0], &[v, v, v], &[0, 0, 0]]),
            PieceKind::L => Self::from_rows(&[&[0, 0, v], &[v, v, v], &[0, 0, 0]]),
            PieceKind::O => Self::from_rows(&[&[v, v], &[v, v]]),
            PieceKind::S => Self::from_rows(&[&[0, v, v], &[v, v, 0], &[0, 0, 0]]),
            PieceKind::T => Self::from_rows(&[&[0, v, 0], &[v, v, v], &[0, 0, 0]]),
            PieceKind::Z => Self::from_rows(&[&[v, v, 0], &[0, v, v], &[0, 0, 0]]),
        }
    }

    /// Build a shape from square rows. Rows beyond [`MAX_SHAPE_SIZE`] are ignored.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len().min(MAX_SHAPE_SIZE);
        let mut cells = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter().take(size).enumerate() {
            for (c, &v) in row.iter().take(size).enumerate() {
                cells[r][c] = v;
            }
        }
        Self {
            size: size as u8,
            cells,
        }
    }

    /// Matrix edge length
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Value at (row, col); zero outside the matrix
    pub fn get(&self, row: usize, col: usize) -> u8 {
        if row >= self.size as usize || col >= self.size as usize {
            return 0;
        }
        self.cells[row][col]
    }

    /// The shape rotated 90° clockwise.
    ///
    /// Equivalent to transposing the matrix and then reversing each row.
    pub fn rotated(&self) -> Self {
        let n = self.size as usize;
        let mut cells = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in cells.iter_mut().enumerate().take(n) {
            for (c, v) in row.iter_mut().enumerate().take(n) {
                *v = self.cells[n - 1 - c][r];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// Offsets (dx, dy) of every occupied matrix cell, row-major
    pub fn occupied(&self) -> impl Iterator<Item = MinoOffset> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |r| {
            (0..n).filter_map(move |c| {
                if self.cells[r][c] != 0 {
                    Some((c as i8, r as i8))
                } else {
                    None
                }
            })
        })
    }

    /// Bounding box of occupied cells as (min_dx, min_dy, max_dx, max_dy)
    pub fn bounds(&self) -> Option<(i8, i8, i8, i8)> {
        self.occupied().fold(None, |acc, (x, y)| match acc {
            None => Some((x, y, x, y)),
            Some((x0, y0, x1, y1)) => Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y))),
        })
    }
}

/// A piece: its kind (which also fixes its colour) and current matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
}

impl Piece {
    /// Create a piece in spawn orientation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: Shape::of(kind),
        }
    }
}
