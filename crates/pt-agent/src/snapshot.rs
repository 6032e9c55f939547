//! What the host shows the engine at the start of a tick.

use pt_core::{Cell, EntityId};
use pt_schedule::PatrolPath;
use pt_spatial::Polygon;

use crate::AgentFlags;

/// Coarse classification of a host entity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    /// A player character.  Always a target.
    Character,
    #[default]
    Npc,
    Other,
}

/// One movable entity on the map.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitySnapshot {
    pub id:            EntityId,
    /// Grid-aligned corner the entity occupies.
    pub cell:          Cell,
    pub kind:          EntityKind,
    pub player_owned:  bool,
    /// Someone is steering this entity directly; the engine leaves it alone.
    pub controlled:    bool,
    pub incapacitated: bool,
    /// Vision range in grid-distance units.
    pub sight_range:   f32,
    pub flags:         AgentFlags,
}

impl EntitySnapshot {
    pub fn new(id: EntityId, cell: Cell) -> Self {
        Self { id, cell, ..Self::default() }
    }

    pub fn with_flags(mut self, flags: AgentFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_kind(mut self, kind: EntityKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_sight(mut self, range: f32) -> Self {
        self.sight_range = range;
        self
    }

    /// Eligible for a patrol record.
    pub fn patrols(&self) -> bool {
        self.flags.patrol_enabled && !self.incapacitated
    }

    /// Something patrollers watch for.
    pub fn is_target(&self) -> bool {
        self.player_owned || self.kind == EntityKind::Character
    }
}

/// Read-only view of the scene for one tick.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldSnapshot {
    pub entities: Vec<EntitySnapshot>,
    /// Designated patrol zones, in declaration order.
    pub zones:    Vec<Polygon>,
    /// Drawn patrol paths, in declaration order.
    pub paths:    Vec<PatrolPath>,
}

impl WorldSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: EntityId) -> Option<&EntitySnapshot> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut EntitySnapshot> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Move `id` to `cell`.  Returns `false` if the entity is unknown.
    pub fn set_cell(&mut self, id: EntityId, cell: Cell) -> bool {
        match self.get_mut(id) {
            Some(e) => {
                e.cell = cell;
                true
            }
            None => false,
        }
    }
}
