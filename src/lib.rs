#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod candidates;
mod common;
mod config;
pub mod duel;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
mod ship;
pub mod strategy;

pub use board::*;
pub use candidates::CandidatePool;
pub use common::*;
pub use config::*;
pub use duel::{fire, run_duel, Combatant, DuelSummary, Shot};
pub use grid::{orthogonal, Grid};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use placement::{attempt_placement, is_eligible};
pub use ship::*;
pub use strategy::{AttackStrategy, EnemyView, Mode};
