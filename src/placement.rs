//! Random ship placement.
//!
//! [`attempt_placement`] is a single try: it samples an anchor (and an
//! orientation or L rotation order) and checks the candidate cells against an
//! immutable grid. It never writes. Committing the result and deciding how
//! often to retry is left to the caller, see [`BoardOwner::place_ships`].
//!
//! [`BoardOwner::place_ships`]: crate::BoardOwner::place_ships

use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::common::{Coord, ShipId};
use crate::config::PlacementRule;
use crate::grid::Grid;
use crate::ship::{project_l, Orientation, Placement, ShipShape, L_ROTATIONS};

/// Whether `(x, y)` may receive a ship cell under `rule`.
pub fn is_eligible(grid: &Grid, x: usize, y: usize, rule: PlacementRule) -> bool {
    if !grid.is_empty_at(x, y) {
        return false;
    }
    match rule {
        PlacementRule::NoOverlap => true,
        PlacementRule::Buffered => grid
            .neighbors8(x, y)
            .all(|(nx, ny)| grid.is_empty_at(nx, ny)),
    }
}

fn all_eligible(grid: &Grid, cells: &[Coord], rule: PlacementRule) -> bool {
    cells.iter().all(|&(x, y)| is_eligible(grid, x, y, rule))
}

/// Make one placement attempt for ship `id`. Returns `None` when the sampled
/// anchor does not admit a collision-free placement.
pub fn attempt_placement<R: Rng + ?Sized>(
    grid: &Grid,
    id: ShipId,
    shape: ShipShape,
    rule: PlacementRule,
    rng: &mut R,
) -> Option<Placement> {
    let anchor = (
        rng.random_range(0..grid.cols()),
        rng.random_range(0..grid.rows()),
    );
    let cells = match shape {
        ShipShape::LShape => attempt_l_shape(grid, anchor, rule, rng)?,
        ShipShape::Straight(_) => {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let cells = shape.project_straight(anchor, orientation, grid.rows(), grid.cols())?;
            if !all_eligible(grid, &cells, rule) {
                return None;
            }
            cells
        }
    };
    log::trace!("ship {} fits at {:?}", id, cells);
    Some(Placement { id, cells })
}

/// Try the four L rotations at `anchor` in random order; first fit wins.
fn attempt_l_shape<R: Rng + ?Sized>(
    grid: &Grid,
    anchor: Coord,
    rule: PlacementRule,
    rng: &mut R,
) -> Option<Vec<Coord>> {
    let mut order = [0usize, 1, 2, 3];
    order.shuffle(rng);
    order.iter().find_map(|&r| {
        project_l(anchor, &L_ROTATIONS[r], grid.rows(), grid.cols())
            .filter(|cells| all_eligible(grid, cells, rule))
    })
}
