use std::collections::{BTreeMap, HashSet};

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use salvo::{AttackStrategy, BoardError, Cell, FleetSpec, Mode, TargetingMode};

fn strategy(rows: usize, cols: usize, targeting: TargetingMode) -> AttackStrategy {
    AttackStrategy::new(rows, cols, &FleetSpec::standard(), targeting).unwrap()
}

fn neighbors(x: usize, y: usize) -> Vec<(usize, usize)> {
    let mut out = vec![(x + 1, y), (x, y + 1)];
    if x > 0 {
        out.push((x - 1, y));
    }
    if y > 0 {
        out.push((x, y - 1));
    }
    out
}

#[test]
fn test_random_exhausts_every_cell_once() {
    let mut rng = SmallRng::seed_from_u64(17);
    let mut s = strategy(3, 4, TargetingMode::Random);
    let mut seen = HashSet::new();
    for _ in 0..12 {
        let (x, y) = s.get_next_attack(&mut rng).unwrap();
        assert!(x < 4 && y < 3);
        assert!(seen.insert((x, y)));
        s.register_attack(x, y, false, false).unwrap();
    }
    assert_eq!(s.candidates_left(), 0);
    assert_eq!(s.get_next_attack(&mut rng).unwrap_err(), BoardError::Exhausted);
}

#[test]
fn test_hunt_probes_neighbor_after_hit() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut s = strategy(10, 10, TargetingMode::Hunt);
    s.register_attack(4, 4, true, false).unwrap();
    assert_eq!(s.mode(), Mode::Hunt);
    let next = s.get_next_attack(&mut rng).unwrap();
    assert!(neighbors(4, 4).contains(&next), "{:?} not adjacent", next);
}

#[test]
fn test_hunt_uses_latest_hit() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut s = strategy(10, 10, TargetingMode::Hunt);
    s.register_attack(2, 2, true, false).unwrap();
    s.register_attack(7, 7, true, false).unwrap();
    assert_eq!(s.hit_queue(), &[(2, 2), (7, 7)]);
    let next = s.get_next_attack(&mut rng).unwrap();
    assert!(neighbors(7, 7).contains(&next));
}

#[test]
fn test_hunt_stays_in_bounds_at_corner() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut s = strategy(10, 10, TargetingMode::Hunt);
    s.register_attack(0, 0, true, false).unwrap();
    let next = s.get_next_attack(&mut rng).unwrap();
    assert!(next == (1, 0) || next == (0, 1));
}

#[test]
fn test_hunt_falls_back_when_neighbors_tried() {
    let mut rng = SmallRng::seed_from_u64(6);
    let mut s = strategy(10, 10, TargetingMode::Hunt);
    s.register_attack(1, 0, false, false).unwrap();
    s.register_attack(0, 1, false, false).unwrap();
    s.register_attack(0, 0, true, false).unwrap();
    let next = s.get_next_attack(&mut rng).unwrap();
    assert!(![(0, 0), (1, 0), (0, 1)].contains(&next));
    assert_eq!(s.mode(), Mode::Hunt);
}

#[test]
fn test_sink_clears_hunt_queue() {
    let mut s = strategy(10, 10, TargetingMode::Hunt);
    s.register_attack(3, 3, true, false).unwrap();
    s.register_attack(3, 4, true, true).unwrap();
    assert_eq!(s.mode(), Mode::Search);
    assert!(s.hit_queue().is_empty());
}

#[test]
fn test_random_mode_never_hunts() {
    let mut s = strategy(10, 10, TargetingMode::Random);
    s.register_attack(3, 3, true, false).unwrap();
    assert_eq!(s.mode(), Mode::Search);
    assert!(s.hit_queue().is_empty());
}

#[test]
fn test_sink_credits_highest_remaining_id() {
    let fleet = FleetSpec::new(BTreeMap::from([(1, 1), (3, 2), (5, 1)])).unwrap();
    let mut s = AttackStrategy::new(10, 10, &fleet, TargetingMode::Random).unwrap();

    s.register_attack(0, 0, true, true).unwrap();
    assert_eq!(s.remaining_ships(), BTreeMap::from([(1, 1), (3, 2), (5, 0)]));
    s.register_attack(1, 0, true, true).unwrap();
    assert_eq!(s.remaining_ships(), BTreeMap::from([(1, 1), (3, 1), (5, 0)]));
    s.register_attack(2, 0, true, true).unwrap();
    assert!(!s.all_ships_sunk());
    s.register_attack(3, 0, true, true).unwrap();
    assert_eq!(s.remaining_ships(), BTreeMap::from([(1, 0), (3, 0), (5, 0)]));
    assert!(s.all_ships_sunk());

    // nothing left to credit
    s.register_attack(4, 0, true, true).unwrap();
    assert!(s.all_ships_sunk());
}

#[test]
fn test_register_rejects_bad_coordinates() {
    let mut s = strategy(4, 6, TargetingMode::Hunt);
    assert_eq!(
        s.register_attack(6, 0, true, false).unwrap_err(),
        BoardError::OutOfBounds { x: 6, y: 0 }
    );
    assert_eq!(
        s.register_attack(0, 4, true, false).unwrap_err(),
        BoardError::OutOfBounds { x: 0, y: 4 }
    );
    s.register_attack(5, 3, false, false).unwrap();
    let before = s.enemy_view();
    assert_eq!(
        s.register_attack(5, 3, true, true).unwrap_err(),
        BoardError::AlreadyAttacked { x: 5, y: 3 }
    );
    assert_eq!(s.enemy_view(), before);
    assert_eq!(s.enemy_view().get(5, 3), Some(Cell::Miss));
    assert!(s.hit_queue().is_empty());
    assert_eq!(s.remaining_ships(), FleetSpec::standard().counts().clone());
}

#[test]
fn test_snapshots_are_copies() {
    let mut s = strategy(5, 5, TargetingMode::Random);
    let mut remaining = s.remaining_ships();
    remaining.insert(1, 99);
    assert_eq!(s.remaining_ships().get(&1), Some(&1));

    let view = s.enemy_view();
    s.register_attack(2, 2, true, false).unwrap();
    assert_eq!(view.get(2, 2), Some(Cell::Unknown));
    assert_eq!(s.enemy_view().get(2, 2), Some(Cell::Hit));
    assert_eq!(s.enemy_view().count(Cell::Unknown), 24);
}

#[test]
fn test_registered_cells_are_not_proposed() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut s = strategy(2, 2, TargetingMode::Random);
    s.register_attack(0, 0, false, false).unwrap();
    s.register_attack(1, 0, false, false).unwrap();
    s.register_attack(0, 1, false, false).unwrap();
    assert_eq!(s.get_next_attack(&mut rng).unwrap(), (1, 1));
    assert_eq!(s.get_next_attack(&mut rng).unwrap_err(), BoardError::Exhausted);
}

#[test]
fn test_zero_dimension_rejected() {
    assert_eq!(
        AttackStrategy::new(3, 0, &FleetSpec::standard(), TargetingMode::Hunt).unwrap_err(),
        BoardError::InvalidDimensions { rows: 3, cols: 0 }
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn any_policy_exhausts_in_rows_times_cols(
        seed in any::<u64>(),
        rows in 1..8usize,
        cols in 1..8usize,
        hunt in any::<bool>(),
    ) {
        let targeting = if hunt { TargetingMode::Hunt } else { TargetingMode::Random };
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut s = strategy(rows, cols, targeting);
        let mut seen = HashSet::new();
        for _ in 0..rows * cols {
            let (x, y) = s.get_next_attack(&mut rng).unwrap();
            prop_assert!(x < cols && y < rows);
            prop_assert!(seen.insert((x, y)));
            let hit = rng.random_bool(0.3);
            let sunk = hit && rng.random_bool(0.2);
            s.register_attack(x, y, hit, sunk).unwrap();
        }
        prop_assert_eq!(s.get_next_attack(&mut rng).unwrap_err(), BoardError::Exhausted);
        prop_assert_eq!(s.enemy_view().count(Cell::Unknown), 0);
    }

    #[test]
    fn hunt_follows_unsunk_hit(seed in any::<u64>(), x in 0..10usize, y in 0..10usize) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut s = strategy(10, 10, TargetingMode::Hunt);
        s.register_attack(x, y, true, false).unwrap();
        let next = s.get_next_attack(&mut rng).unwrap();
        prop_assert!(next.0 < 10 && next.1 < 10);
        prop_assert!(neighbors(x, y).contains(&next));
    }
}
