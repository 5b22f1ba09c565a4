//! Common types for salvo: coordinates, board errors and enemy-view cells.

use thiserror::Error;

/// Identifier of a ship type. Also the value written into every grid cell the
/// ship occupies, so `0` is reserved for empty water.
pub type ShipId = u32;

/// Grid value of an empty cell.
pub const EMPTY: ShipId = 0;

/// An `(x, y)` position: `x` is the column, `y` the row.
pub type Coord = (usize, usize);

/// Errors returned by board and strategy operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Coordinate lies outside `[0, cols) × [0, rows)`.
    #[error("coordinates ({x}, {y}) are out of bounds")]
    OutOfBounds { x: usize, y: usize },
    /// The coordinate was attacked (or registered) before.
    #[error("position ({x}, {y}) has already been attacked")]
    AlreadyAttacked { x: usize, y: usize },
    /// No candidate positions are left to attack.
    #[error("no more available positions to attack")]
    Exhausted,
    /// Every bounded resample produced an invalid candidate.
    #[error("failed to find a valid attack position after {attempts} attempts")]
    CorruptionGuard { attempts: usize },
    /// A board needs at least one row and one column.
    #[error("invalid board dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    /// Ship id 0 or a zero-length straight ship.
    #[error("invalid ship configuration for id {id}")]
    InvalidShip { id: ShipId },
    /// Bounded placement gave up on a ship.
    #[error("unable to place ship {id} after {attempts} attempts")]
    UnableToPlaceShip { id: ShipId, attempts: usize },
}

/// What the attacker knows about one cell of the enemy board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Unknown,
    Hit,
    Miss,
}
