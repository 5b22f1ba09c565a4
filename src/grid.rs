//! Fixed-size integer grid shared by the board and the placement logic.
//!
//! Cells hold `0` for empty water or the [`ShipId`] of the ship occupying
//! them. Storage is a flat row-major vector.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coord, ShipId, EMPTY};

/// A `rows × cols` matrix of ship ids.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<ShipId>,
}

impl Grid {
    /// Create an all-empty grid. Fails on a zero dimension.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Grid {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` when `(x, y)` lies on the grid.
    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows
    }

    #[inline]
    fn check_bounds(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if self.in_bounds(x, y) {
            Ok(y * self.cols + x)
        } else {
            Err(BoardError::OutOfBounds { x, y })
        }
    }

    /// Value at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<ShipId, BoardError> {
        let idx = self.check_bounds(x, y)?;
        Ok(self.cells[idx])
    }

    /// Write `id` at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, id: ShipId) -> Result<(), BoardError> {
        let idx = self.check_bounds(x, y)?;
        self.cells[idx] = id;
        Ok(())
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = EMPTY);
    }

    /// Returns `true` when `(x, y)` is on the grid and empty.
    pub fn is_empty_at(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Ok(EMPTY))
    }

    /// Number of empty cells.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&c| c == EMPTY).count()
    }

    /// In-bounds 8-neighborhood of `(x, y)`, excluding the cell itself.
    pub fn neighbors8(&self, x: usize, y: usize) -> impl Iterator<Item = Coord> + '_ {
        const DELTAS: [(isize, isize); 8] = [
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ];
        DELTAS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(x, y, dx, dy))
    }

    /// In-bounds orthogonal neighbors of `(x, y)`: up, down, left, right.
    pub fn neighbors4(&self, x: usize, y: usize) -> impl Iterator<Item = Coord> + '_ {
        orthogonal(x, y, self.rows, self.cols)
    }

    fn offset(&self, x: usize, y: usize, dx: isize, dy: isize) -> Option<Coord> {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        self.in_bounds(nx, ny).then_some((nx, ny))
    }

    /// Rows as slices, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[ShipId]> {
        self.cells.chunks(self.cols)
    }
}

/// In-bounds orthogonal neighbors of `(x, y)` on a `rows × cols` board.
/// `(x, y)` itself must lie on the board.
pub fn orthogonal(x: usize, y: usize, rows: usize, cols: usize) -> impl Iterator<Item = Coord> {
    let up = y.checked_sub(1).map(|ny| (x, ny));
    let down = (y + 1 < rows).then_some((x, y + 1));
    let left = x.checked_sub(1).map(|nx| (nx, y));
    let right = (x + 1 < cols).then_some((x + 1, y));
    [up, down, left, right]
        .into_iter()
        .flatten()
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}:", self.rows, self.cols)?;
        for row in self.iter_rows() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
