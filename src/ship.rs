//! Ship shapes and their projections onto a grid.

use alloc::vec::Vec;

use crate::common::{Coord, ShipId};

/// Orientation of a straight ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// The four rotations of the L-shaped ship as `(dx, dy)` offsets from the
/// anchor cell.
pub const L_ROTATIONS: [[(usize, usize); 4]; 4] = [
    [(0, 0), (1, 0), (2, 0), (2, 1)],
    [(0, 0), (0, 1), (0, 2), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 0)],
    [(1, 0), (1, 1), (1, 2), (0, 2)],
];

/// Shape of a ship type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipShape {
    /// A line of the given length.
    Straight(usize),
    /// A 4-cell bent ship with 4 rotations.
    LShape,
}

impl ShipShape {
    /// Number of cells the ship covers.
    pub fn cells(&self) -> usize {
        match self {
            ShipShape::Straight(len) => *len,
            ShipShape::LShape => 4,
        }
    }

    /// Project a straight ship from `anchor`. Returns `None` if the ship would
    /// leave a `rows × cols` board or if the shape is not straight.
    pub fn project_straight(
        &self,
        anchor: Coord,
        orientation: Orientation,
        rows: usize,
        cols: usize,
    ) -> Option<Vec<Coord>> {
        let len = match self {
            ShipShape::Straight(len) => *len,
            ShipShape::LShape => return None,
        };
        let (x, y) = anchor;
        match orientation {
            Orientation::Horizontal => {
                let end = x.checked_add(len).filter(|&end| y < rows && end <= cols)?;
                Some((x..end).map(|cx| (cx, y)).collect())
            }
            Orientation::Vertical => {
                let end = y.checked_add(len).filter(|&end| x < cols && end <= rows)?;
                Some((y..end).map(|cy| (x, cy)).collect())
            }
        }
    }
}

/// Project one L rotation from `anchor`, or `None` if any cell leaves the
/// board.
pub fn project_l(anchor: Coord, rotation: &[(usize, usize); 4], rows: usize, cols: usize) -> Option<Vec<Coord>> {
    let (x, y) = anchor;
    rotation
        .iter()
        .map(|&(dx, dy)| {
            let cx = x.checked_add(dx).filter(|&cx| cx < cols)?;
            let cy = y.checked_add(dy).filter(|&cy| cy < rows)?;
            Some((cx, cy))
        })
        .collect()
}

/// The committed cells of one placed ship.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub id: ShipId,
    pub cells: Vec<Coord>,
}

impl Placement {
    /// Whether the placement covers `(x, y)`.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.cells.contains(&(x, y))
    }
}
