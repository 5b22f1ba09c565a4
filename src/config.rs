use alloc::collections::BTreeMap;

use crate::common::{BoardError, ShipId, EMPTY};
use crate::ship::ShipShape;

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;

/// Resample cap of the targeting safety net.
pub const MAX_TARGET_ATTEMPTS: usize = 100;

/// Standard catalogue of ship shapes. Ids missing here are straight ships
/// whose length equals the id.
pub const STANDARD_SHAPES: [(ShipId, ShipShape); 5] = [
    (1, ShipShape::Straight(2)),
    (2, ShipShape::Straight(3)),
    (3, ShipShape::Straight(4)),
    (4, ShipShape::Straight(5)),
    (5, ShipShape::LShape),
];

/// Collision rule used while placing ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementRule {
    /// A cell is eligible when it is empty: ships may touch but never share
    /// a cell.
    #[default]
    NoOverlap,
    /// A cell is eligible when it and its 8 neighbors are empty.
    Buffered,
}

/// Targeting policy of an [`AttackStrategy`](crate::AttackStrategy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetingMode {
    /// Uniform random choice among untried cells.
    #[default]
    Random,
    /// Probe orthogonal neighbors of the latest unresolved hit first.
    Hunt,
}

/// Ship configuration: shapes per id and how many of each to place.
///
/// Deserialized fleets go through the same checks as [`FleetSpec::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawFleet")
)]
pub struct FleetSpec {
    shapes: BTreeMap<ShipId, ShipShape>,
    counts: BTreeMap<ShipId, usize>,
}

impl FleetSpec {
    /// Fleet with the given counts, shapes taken from [`STANDARD_SHAPES`].
    pub fn new(counts: BTreeMap<ShipId, usize>) -> Result<Self, BoardError> {
        let fleet = FleetSpec {
            shapes: STANDARD_SHAPES.iter().copied().collect(),
            counts,
        };
        fleet.validate()?;
        Ok(fleet)
    }

    /// One ship of every standard type.
    pub fn standard() -> Self {
        FleetSpec {
            shapes: STANDARD_SHAPES.iter().copied().collect(),
            counts: STANDARD_SHAPES.iter().map(|&(id, _)| (id, 1)).collect(),
        }
    }

    /// Override the shape of `id`.
    pub fn with_shape(mut self, id: ShipId, shape: ShipShape) -> Result<Self, BoardError> {
        self.shapes.insert(id, shape);
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), BoardError> {
        for &id in self.counts.keys() {
            if id == EMPTY || self.shape_of(id) == ShipShape::Straight(0) {
                return Err(BoardError::InvalidShip { id });
            }
        }
        Ok(())
    }

    /// Shape of `id`, falling back to a straight ship of length `id`.
    pub fn shape_of(&self, id: ShipId) -> ShipShape {
        self.shapes
            .get(&id)
            .copied()
            .unwrap_or(ShipShape::Straight(id as usize))
    }

    /// Ship id → number of ships to place.
    pub fn counts(&self) -> &BTreeMap<ShipId, usize> {
        &self.counts
    }

    /// Total number of cells the whole fleet covers, saturating at
    /// `usize::MAX`.
    pub fn total_cells(&self) -> usize {
        self.counts.iter().fold(0usize, |total, (&id, &count)| {
            total.saturating_add(self.shape_of(id).cells().saturating_mul(count))
        })
    }
}

#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawFleet {
    shapes: BTreeMap<ShipId, ShipShape>,
    counts: BTreeMap<ShipId, usize>,
}

#[cfg(feature = "std")]
impl TryFrom<RawFleet> for FleetSpec {
    type Error = BoardError;

    fn try_from(raw: RawFleet) -> Result<Self, Self::Error> {
        let fleet = FleetSpec {
            shapes: raw.shapes,
            counts: raw.counts,
        };
        fleet.validate()?;
        Ok(fleet)
    }
}

impl Default for FleetSpec {
    fn default() -> Self {
        Self::standard()
    }
}
