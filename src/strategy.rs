//! Attack targeting against an unseen enemy board.
//!
//! The strategy is a small state machine. While no unresolved hit is known it
//! is in [`Mode::Search`] and draws uniformly from the cells it has not tried.
//! Under [`TargetingMode::Hunt`] a hit moves it to [`Mode::Hunt`], where it
//! probes the orthogonal neighbors of the latest hit until a sink clears the
//! queue.

use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::candidates::CandidatePool;
use crate::common::{BoardError, Cell, Coord, ShipId};
use crate::config::{FleetSpec, TargetingMode, MAX_TARGET_ATTEMPTS};
use crate::grid::orthogonal;

/// The attacker's knowledge of the enemy board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyView {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl EnemyView {
    fn new(rows: usize, cols: usize) -> Self {
        EnemyView {
            rows,
            cols,
            cells: vec![Cell::Unknown; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `(x, y)`, or `None` off the board.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.cols && y < self.rows).then(|| self.cells[y * self.cols + x])
    }

    /// Number of cells in the given state.
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }
}

/// Current phase of the targeting state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// No unresolved hit; pick at random.
    Search,
    /// At least one unresolved hit; probe around it.
    Hunt,
}

/// Chooses attack coordinates and tracks what is left of the enemy fleet.
#[derive(Debug, Clone)]
pub struct AttackStrategy {
    targeting: TargetingMode,
    view: EnemyView,
    remaining: BTreeMap<ShipId, usize>,
    candidates: CandidatePool,
    hit_queue: Vec<Coord>,
}

impl AttackStrategy {
    /// Strategy for a `rows × cols` enemy board carrying `fleet`.
    pub fn new(
        rows: usize,
        cols: usize,
        fleet: &FleetSpec,
        targeting: TargetingMode,
    ) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(AttackStrategy {
            targeting,
            view: EnemyView::new(rows, cols),
            remaining: fleet.counts().clone(),
            candidates: CandidatePool::full(rows, cols),
            hit_queue: Vec::new(),
        })
    }

    pub fn rows(&self) -> usize {
        self.view.rows
    }

    pub fn cols(&self) -> usize {
        self.view.cols
    }

    pub fn targeting(&self) -> TargetingMode {
        self.targeting
    }

    pub fn mode(&self) -> Mode {
        if self.hit_queue.is_empty() {
            Mode::Search
        } else {
            Mode::Hunt
        }
    }

    /// Unresolved hits, oldest first.
    pub fn hit_queue(&self) -> &[Coord] {
        &self.hit_queue
    }

    /// Number of coordinates not yet tried.
    pub fn candidates_left(&self) -> usize {
        self.candidates.len()
    }

    /// Pick the next coordinate to attack and withdraw it from the pool.
    pub fn get_next_attack<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, BoardError> {
        if self.candidates.is_empty() {
            return Err(BoardError::Exhausted);
        }
        if let Some(target) = self.hunt_target(rng) {
            return Ok(target);
        }
        self.random_target(rng)
    }

    /// Untried orthogonal neighbor of the latest hit, if hunting.
    fn hunt_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        if self.targeting != TargetingMode::Hunt {
            return None;
        }
        let &(x, y) = self.hit_queue.last()?;
        let open: Vec<Coord> = orthogonal(x, y, self.rows(), self.cols())
            .filter(|&c| self.candidates.contains(c))
            .collect();
        let &target = open.choose(rng)?;
        self.candidates.remove(target);
        log::debug!("hunting around ({}, {}): {:?}", x, y, target);
        Some(target)
    }

    fn random_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, BoardError> {
        for _ in 0..MAX_TARGET_ATTEMPTS {
            let i = rng.random_range(0..self.candidates.len());
            match self.candidates.get(i) {
                Some((x, y)) if x < self.cols() && y < self.rows() => {
                    return Ok(self.candidates.remove_at(i));
                }
                _ => {}
            }
        }
        log::warn!(
            "no valid candidate after {} draws from {} positions",
            MAX_TARGET_ATTEMPTS,
            self.candidates.len()
        );
        Err(BoardError::CorruptionGuard {
            attempts: MAX_TARGET_ATTEMPTS,
        })
    }

    /// Record the outcome of an attack on `(x, y)`.
    ///
    /// A sink credits the highest ship id that still has ships afloat: the
    /// defender only reports that *a* ship sank, not which one.
    pub fn register_attack(
        &mut self,
        x: usize,
        y: usize,
        is_hit: bool,
        is_sunk: bool,
    ) -> Result<(), BoardError> {
        match self.view.get(x, y) {
            None => return Err(BoardError::OutOfBounds { x, y }),
            Some(Cell::Unknown) => {}
            Some(_) => return Err(BoardError::AlreadyAttacked { x, y }),
        }
        let idx = y * self.cols() + x;
        self.view.cells[idx] = if is_hit { Cell::Hit } else { Cell::Miss };
        self.candidates.remove((x, y));

        let hunting = self.targeting == TargetingMode::Hunt;
        if is_hit && hunting {
            self.hit_queue.push((x, y));
        }
        if is_sunk {
            if let Some((id, count)) = self.remaining.iter_mut().rev().find(|(_, c)| **c > 0) {
                *count -= 1;
                log::debug!("sink credited to ship {} ({} left)", id, count);
            }
            if hunting {
                self.hit_queue.clear();
            }
        }
        Ok(())
    }

    /// Snapshot of the enemy view.
    pub fn enemy_view(&self) -> EnemyView {
        self.view.clone()
    }

    /// Snapshot of ship id → ships still afloat.
    pub fn remaining_ships(&self) -> BTreeMap<ShipId, usize> {
        self.remaining.clone()
    }

    pub fn all_ships_sunk(&self) -> bool {
        self.remaining.values().all(|&c| c == 0)
    }
}
