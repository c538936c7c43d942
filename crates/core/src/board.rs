//! Board module - manages the tetris playfield
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows with `y < 0` lie above the visible board; shapes may hang there while
//! spawning or rotating, but they are never stored.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// A cell on the board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Locked cell of the given kind
pub type Cell = Option<PieceKind>;

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Board rendered as piece ids (`0` = empty, `1..=7` = [`PieceKind::id`]).
pub type U8Grid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Row indices removed by a single line-clear pass, bottom to top.
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Build a board from a grid of piece ids. Unknown ids are treated as empty.
    pub fn from_grid(grid: &U8Grid) -> Self {
        let mut board = Self::new();
        for (y, row) in grid.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                board.cells[y * BOARD_WIDTH as usize + x] = PieceKind::from_id(v);
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Whether `shape` placed with its origin at (x, y) would collide.
    ///
    /// A cell collides when it is left/right of the board, at or below the
    /// bottom edge, or on an occupied board cell. Cells above the top edge
    /// (`y < 0`) are only checked horizontally.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.occupied().any(|(dx, dy)| {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                return true;
            }
            py >= 0 && self.is_occupied(px, py)
        })
    }

    /// Write `shape` into the board as locked cells of `kind`.
    ///
    /// Cells above the top edge are discarded. Returns how many were discarded
    /// so callers can tell a partial top-out from a clean merge.
    pub fn merge(&mut self, shape: &Shape, kind: PieceKind, x: i8, y: i8) -> usize {
        let mut discarded = 0;
        for (dx, dy) in shape.occupied() {
            if !self.set(x + dx, y + dy, Some(kind)) {
                discarded += 1;
            }
        }
        discarded
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    /// Uses a two-pointer algorithm with zero-allocation; the surviving rows keep
    /// their order and empty rows are inserted at the top.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                // This row is not full, move it down to the write position
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared_rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Export as a grid of piece ids.
    pub fn write_u8_grid(&self, out: &mut U8Grid) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[y * width + x].map(|k| k.id()).unwrap_or(0);
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_collides_ignores_rows_above_top() {
        let board = Board::new();
        let shape = Shape::of(PieceKind::I);
        // I occupies matrix row 1, so origin y=-1 puts it on board row 0.
        assert!(!board.collides(&shape, 3, -1));
        // Entirely above the board is still legal.
        assert!(!board.collides(&shape, 3, -5));
    }

    #[test]
    fn test_collides_walls_and_floor() {
        let board = Board::new();
        let shape = Shape::of(PieceKind::O);
        assert!(board.collides(&shape, -1, 0));
        assert!(board.collides(&shape, 9, 0));
        assert!(!board.collides(&shape, 8, 18));
        assert!(board.collides(&shape, 8, 19));
    }

    #[test]
    fn test_merge_discards_cells_above_top() {
        let mut board = Board::new();
        let shape = Shape::of(PieceKind::O);
        let discarded = board.merge(&shape, PieceKind::O, 4, -1);
        assert_eq!(discarded, 2);
        assert!(board.is_occupied(4, 0));
        assert!(board.is_occupied(5, 0));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
    }

    #[test]
    fn test_u8_grid_round_trip() {
        let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        grid[19][0] = PieceKind::I.id();
        grid[5][7] = PieceKind::Z.id();

        let board = Board::from_grid(&grid);
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::I)));
        assert_eq!(board.get(7, 5), Some(Some(PieceKind::Z)));

        let mut out = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_u8_grid(&mut out);
        assert_eq!(out, grid);
    }
}
