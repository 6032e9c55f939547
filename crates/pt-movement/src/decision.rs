//! Strategy inputs and outputs.

use pt_core::{Cell, PatrolConfig};
use pt_detect::Target;
use pt_spatial::OccupancyLedger;

/// Why an agent stays put this tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HoldReason {
    /// No admissible neighbour.
    Stalled,
    /// Path follower without a usable path.
    MissingPath,
    /// The cell the agent wants is taken.
    Blocked,
}

/// A strategy's answer for one agent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Move(Cell),
    Hold(HoldReason),
}

impl Decision {
    pub fn destination(self) -> Option<Cell> {
        match self {
            Decision::Move(cell) => Some(cell),
            Decision::Hold(_) => None,
        }
    }
}

/// Read-only state shared by every strategy call in a tick.
pub struct MoveContext<'a, G: ?Sized> {
    pub geometry: &'a G,
    pub ledger:   &'a OccupancyLedger,
    pub config:   &'a PatrolConfig,
    pub targets:  &'a [Target],
}

impl<'a, G: ?Sized> MoveContext<'a, G> {
    pub fn new(
        geometry: &'a G,
        ledger:   &'a OccupancyLedger,
        config:   &'a PatrolConfig,
        targets:  &'a [Target],
    ) -> Self {
        Self { geometry, ledger, config, targets }
    }

    pub fn target(&self, entity: pt_core::EntityId) -> Option<&'a Target> {
        self.targets.iter().find(|t| t.entity == entity)
    }
}
