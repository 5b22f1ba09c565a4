//! Pool of not-yet-attacked coordinates with O(1) removal.

use alloc::vec::Vec;

use crate::common::Coord;

/// Sentinel for "not in the pool" in the position index.
const ABSENT: usize = usize::MAX;

/// Coordinates still open for attack.
///
/// `items` holds the live coordinates in arbitrary order; `slots` maps every
/// board index to the coordinate's position in `items`, so removing any
/// coordinate is a swap-remove plus one index fix-up.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    cols: usize,
    items: Vec<Coord>,
    slots: Vec<usize>,
}

impl CandidatePool {
    /// Every coordinate of a `rows × cols` board, row-major.
    pub fn full(rows: usize, cols: usize) -> Self {
        let items: Vec<Coord> = (0..rows)
            .flat_map(|y| (0..cols).map(move |x| (x, y)))
            .collect();
        let slots = (0..items.len()).collect();
        CandidatePool { cols, items, slots }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn slot_of(&self, (x, y): Coord) -> Option<usize> {
        if x >= self.cols {
            return None;
        }
        self.slots
            .get(y * self.cols + x)
            .copied()
            .filter(|&s| s != ABSENT)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.slot_of(coord).is_some()
    }

    /// Coordinate at position `i` of the live list.
    pub fn get(&self, i: usize) -> Option<Coord> {
        self.items.get(i).copied()
    }

    /// Remove `coord`; returns whether it was present.
    pub fn remove(&mut self, coord: Coord) -> bool {
        match self.slot_of(coord) {
            Some(slot) => {
                self.remove_at(slot);
                true
            }
            None => false,
        }
    }

    /// Remove and return the coordinate at position `i` of the live list.
    pub fn remove_at(&mut self, i: usize) -> Coord {
        let coord = self.items.swap_remove(i);
        self.slots[coord.1 * self.cols + coord.0] = ABSENT;
        if let Some(&(mx, my)) = self.items.get(i) {
            self.slots[my * self.cols + mx] = i;
        }
        coord
    }
}
