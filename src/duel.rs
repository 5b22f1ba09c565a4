//! Turn-based AI-vs-AI driver wiring a [`BoardOwner`] to an opposing
//! [`AttackStrategy`].

use rand::Rng;

use crate::board::BoardOwner;
use crate::common::{BoardError, Coord, EMPTY};
use crate::config::{FleetSpec, PlacementRule, TargetingMode};
use crate::strategy::AttackStrategy;

/// One side of a duel: its own board and its model of the opponent's.
#[derive(Debug)]
pub struct Combatant {
    pub board: BoardOwner,
    pub strategy: AttackStrategy,
}

impl Combatant {
    /// Build a combatant whose board and strategy share dimensions and fleet.
    /// Ships are not placed yet.
    pub fn new(
        rows: usize,
        cols: usize,
        fleet: FleetSpec,
        rule: PlacementRule,
        targeting: TargetingMode,
    ) -> Result<Self, BoardError> {
        let strategy = AttackStrategy::new(rows, cols, &fleet, targeting)?;
        let board = BoardOwner::new(rows, cols, fleet, rule)?;
        Ok(Combatant { board, strategy })
    }
}

/// Result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub target: Coord,
    pub hit: bool,
    pub sunk: bool,
}

/// Outcome of [`run_duel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelSummary {
    /// Index of the winning combatant (`0` or `1`); `None` if the turn cap
    /// was reached first.
    pub winner: Option<usize>,
    /// Number of full or partial rounds played.
    pub turns: usize,
    /// Shots fired by each combatant.
    pub shots: [usize; 2],
}

/// Let `attacker` fire one shot at `defender` and feed the result back.
pub fn fire<R: Rng + ?Sized>(
    attacker: &mut AttackStrategy,
    defender: &mut BoardOwner,
    rng: &mut R,
) -> Result<Shot, BoardError> {
    let (x, y) = attacker.get_next_attack(rng)?;
    let hit = defender.attack(x, y)? != EMPTY;
    let sunk = hit && defender.ship_sunk_at(x, y);
    attacker.register_attack(x, y, hit, sunk)?;
    Ok(Shot {
        target: (x, y),
        hit,
        sunk,
    })
}

/// Alternate shots, `first` opening, until one strategy reports every enemy
/// ship sunk or `max_turns` rounds pass. Both boards must already hold their
/// ships.
pub fn run_duel<R: Rng + ?Sized>(
    first: &mut Combatant,
    second: &mut Combatant,
    rng: &mut R,
    max_turns: usize,
) -> Result<DuelSummary, BoardError> {
    let mut shots = [0usize; 2];
    for turn in 1..=max_turns {
        fire(&mut first.strategy, &mut second.board, rng)?;
        shots[0] += 1;
        if first.strategy.all_ships_sunk() {
            log::info!("combatant 0 wins after {} turns", turn);
            return Ok(DuelSummary {
                winner: Some(0),
                turns: turn,
                shots,
            });
        }
        fire(&mut second.strategy, &mut first.board, rng)?;
        shots[1] += 1;
        if second.strategy.all_ships_sunk() {
            log::info!("combatant 1 wins after {} turns", turn);
            return Ok(DuelSummary {
                winner: Some(1),
                turns: turn,
                shots,
            });
        }
    }
    log::info!("no winner after {} turns", max_turns);
    Ok(DuelSummary {
        winner: None,
        turns: max_turns,
        shots,
    })
}
