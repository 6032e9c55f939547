use pt_agent::RosterUpdate;
use pt_core::{EntityId, Tick};
use pt_detect::Transition;
use pt_movement::HoldReason;

use crate::PositionUpdate;

/// Everything one patrol tick did.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    pub tick:        Tick,
    pub roster:      RosterUpdate,
    /// Committed moves, in roster order.
    pub updates:     Vec<PositionUpdate>,
    pub holds:       Vec<(EntityId, HoldReason)>,
    /// Agents that saw a target and spent the tick watching it.
    pub watching:    Vec<EntityId>,
    /// Agents absent from the snapshot or under direct control.
    pub skipped:     Vec<EntityId>,
    pub transitions: Vec<Transition>,
}

impl TickReport {
    pub(crate) fn new(tick: Tick, roster: RosterUpdate) -> Self {
        Self {
            tick,
            roster,
            updates:     Vec::new(),
            holds:       Vec::new(),
            watching:    Vec::new(),
            skipped:     Vec::new(),
            transitions: Vec::new(),
        }
    }

    pub fn moved(&self, entity: EntityId) -> Option<pt_core::Cell> {
        self.updates.iter().find(|u| u.entity == entity).map(|u| u.cell)
    }
}
