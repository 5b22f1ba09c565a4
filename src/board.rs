//! A player's own board: ship placement, incoming attacks, occupancy stats.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{BoardError, ShipId};
use crate::config::{FleetSpec, PlacementRule};
use crate::grid::Grid;
use crate::placement::attempt_placement;
use crate::ship::Placement;

/// Occupancy counts, recomputed on every call to [`BoardOwner::board_stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardStats {
    pub empty_spaces: usize,
    pub occupied_spaces: usize,
}

/// Owns a grid with randomly placed ships and the set of attacked cells.
pub struct BoardOwner {
    grid: Grid,
    fleet: FleetSpec,
    rule: PlacementRule,
    attacked: Vec<bool>,
    attack_count: usize,
    placements: Vec<Placement>,
}

impl BoardOwner {
    /// Create an empty board. No ships are placed until
    /// [`place_ships`](Self::place_ships) is called.
    pub fn new(
        rows: usize,
        cols: usize,
        fleet: FleetSpec,
        rule: PlacementRule,
    ) -> Result<Self, BoardError> {
        let grid = Grid::new(rows, cols)?;
        Ok(BoardOwner {
            grid,
            fleet,
            rule,
            attacked: vec![false; rows * cols],
            attack_count: 0,
            placements: Vec::new(),
        })
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Read-only view of the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fleet(&self) -> &FleetSpec {
        &self.fleet
    }

    pub fn rule(&self) -> PlacementRule {
        self.rule
    }

    /// Ships committed so far, in placement order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Place every ship of the fleet, retrying each until it fits.
    ///
    /// There is no attempt cap: a fleet that cannot fit on the board (for
    /// instance under [`PlacementRule::Buffered`] on a crowded grid) never
    /// returns. Use [`try_place_ships`](Self::try_place_ships) to bound it.
    pub fn place_ships<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let fleet = self.fleet.clone();
        for (&id, &count) in fleet.counts() {
            let shape = fleet.shape_of(id);
            for _ in 0..count {
                let mut attempts = 0usize;
                let placement = loop {
                    attempts += 1;
                    if let Some(p) = attempt_placement(&self.grid, id, shape, self.rule, rng) {
                        break p;
                    }
                };
                self.commit(placement, attempts);
            }
        }
    }

    /// Like [`place_ships`](Self::place_ships) but gives up on a ship after
    /// `max_attempts` failed tries. Ships committed before the failure stay
    /// on the board.
    pub fn try_place_ships<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<(), BoardError> {
        let fleet = self.fleet.clone();
        for (&id, &count) in fleet.counts() {
            let shape = fleet.shape_of(id);
            for _ in 0..count {
                let placement = (1..=max_attempts).find_map(|attempt| {
                    attempt_placement(&self.grid, id, shape, self.rule, rng).map(|p| (p, attempt))
                });
                match placement {
                    Some((p, attempts)) => self.commit(p, attempts),
                    None => {
                        log::debug!("giving up on ship {} after {} attempts", id, max_attempts);
                        return Err(BoardError::UnableToPlaceShip {
                            id,
                            attempts: max_attempts,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn commit(&mut self, placement: Placement, attempts: usize) {
        for &(x, y) in &placement.cells {
            // cells come from a projection over this grid
            let written = self.grid.set(x, y, placement.id);
            debug_assert!(written.is_ok(), "placement cell ({}, {}) off the grid", x, y);
        }
        log::debug!(
            "placed ship {} at {:?} after {} attempt(s)",
            placement.id,
            placement.cells,
            attempts
        );
        self.placements.push(placement);
    }

    /// Value at `(x, y)`: `0` for water, otherwise the ship id.
    pub fn get_tile(&self, x: usize, y: usize) -> Result<ShipId, BoardError> {
        self.grid.get(x, y)
    }

    /// Whether `(x, y)` has been attacked. Out-of-range cells never are.
    pub fn is_attacked(&self, x: usize, y: usize) -> bool {
        self.grid.in_bounds(x, y) && self.attacked[y * self.cols() + x]
    }

    /// Number of distinct cells attacked so far.
    pub fn attack_count(&self) -> usize {
        self.attack_count
    }

    /// Record an attack and return the cell value (`0` = miss).
    pub fn attack(&mut self, x: usize, y: usize) -> Result<ShipId, BoardError> {
        let value = self.grid.get(x, y)?;
        let idx = y * self.cols() + x;
        if self.attacked[idx] {
            return Err(BoardError::AlreadyAttacked { x, y });
        }
        self.attacked[idx] = true;
        self.attack_count += 1;
        Ok(value)
    }

    /// `true` when a placed ship covers `(x, y)` and all of its cells have
    /// been attacked.
    pub fn ship_sunk_at(&self, x: usize, y: usize) -> bool {
        self.placements
            .iter()
            .find(|p| p.contains(x, y))
            .is_some_and(|p| p.cells.iter().all(|&(cx, cy)| self.is_attacked(cx, cy)))
    }

    /// `true` when every placed ship has been fully attacked.
    pub fn all_sunk(&self) -> bool {
        self.placements
            .iter()
            .all(|p| p.cells.iter().all(|&(x, y)| self.is_attacked(x, y)))
    }

    /// Empty the grid and forget all attacks. The fleet is kept, so
    /// [`place_ships`](Self::place_ships) can run again.
    pub fn reset_board(&mut self) {
        self.grid.clear();
        self.attacked.iter_mut().for_each(|a| *a = false);
        self.attack_count = 0;
        self.placements.clear();
    }

    pub fn board_stats(&self) -> BoardStats {
        let empty_spaces = self.grid.count_empty();
        BoardStats {
            empty_spaces,
            occupied_spaces: self.rows() * self.cols() - empty_spaces,
        }
    }
}

impl fmt::Debug for BoardOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BoardOwner {{\n  rule: {:?},\n  fleet: {:?},\n  attacks: {},\n  grid: {:?}}}",
            self.rule, self.fleet, self.attack_count, self.grid
        )
    }
}
