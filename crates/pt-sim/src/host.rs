//! The host interface and an in-memory host.

use pt_agent::WorldSnapshot;
use pt_core::{Cell, EntityId};

/// One committed move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PositionUpdate {
    pub entity: EntityId,
    pub cell:   Cell,
}

/// What the engine needs from the surrounding application.
pub trait PatrolHost {
    /// The scene as it stands now.
    fn snapshot(&self) -> &WorldSnapshot;

    /// Game paused: no patrol ticks run.
    fn is_paused(&self) -> bool {
        false
    }

    /// Turn-based combat in progress: no patrol ticks run.
    fn combat_active(&self) -> bool {
        false
    }

    /// Apply one tick's moves as a single batch.
    fn apply_updates(&mut self, updates: &[PositionUpdate]);
}

/// A host whose whole scene is a [`WorldSnapshot`] held in memory.  Updates
/// are applied to the snapshot directly.
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    pub world:   WorldSnapshot,
    pub paused:  bool,
    pub combat:  bool,
    /// Number of `apply_updates` batches received.
    pub commits: usize,
}

impl MemoryHost {
    pub fn new(world: WorldSnapshot) -> Self {
        Self { world, ..Self::default() }
    }

    pub fn cell_of(&self, entity: EntityId) -> Option<Cell> {
        self.world.get(entity).map(|e| e.cell)
    }
}

impl PatrolHost for MemoryHost {
    fn snapshot(&self) -> &WorldSnapshot {
        &self.world
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn combat_active(&self) -> bool {
        self.combat
    }

    fn apply_updates(&mut self, updates: &[PositionUpdate]) {
        for u in updates {
            self.world.set_cell(u.entity, u.cell);
        }
        self.commits += 1;
    }
}
