//! `PatrolAgent`: the per-patroller record and its movement memory.

use pt_core::{AgentRng, Cell, EntityId, PatrolConfig};
use pt_detect::Detection;
use pt_schedule::PathAssignment;
use pt_spatial::Polygon;

use crate::AgentFlags;

#[cfg(not(feature = "fx-hash"))]
type CellSet = std::collections::HashSet<Cell>;
#[cfg(feature = "fx-hash")]
type CellSet = rustc_hash::FxHashSet<Cell>;

// ── VisitedCells ──────────────────────────────────────────────────────────────

/// Insertion-ordered set of cells an agent has stood on.
#[derive(Clone, Debug, Default)]
pub struct VisitedCells {
    order: Vec<Cell>,
    set:   CellSet,
}

impl VisitedCells {
    /// A history holding only `start`.
    pub fn new(start: Cell) -> Self {
        let mut v = Self::default();
        v.insert(start);
        v
    }

    /// Returns `false` if `cell` was already recorded.
    pub fn insert(&mut self, cell: Cell) -> bool {
        if self.set.insert(cell) {
            self.order.push(cell);
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.set.contains(&cell)
    }

    /// Forget everything except `keep`.
    pub fn reset_to(&mut self, keep: Cell) {
        self.order.clear();
        self.set.clear();
        self.insert(keep);
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// ── StallCounter ──────────────────────────────────────────────────────────────

/// Consecutive holds on one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StallCounter {
    cell:  Option<Cell>,
    count: u32,
}

impl StallCounter {
    /// Record a hold at `cell` and return the consecutive count there.
    pub fn bump(&mut self, cell: Cell) -> u32 {
        if self.cell == Some(cell) {
            self.count += 1;
        } else {
            self.cell = Some(cell);
            self.count = 1;
        }
        self.count
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ── PatrolAgent ───────────────────────────────────────────────────────────────

/// Everything the engine tracks for one patrolling entity.
///
/// `position` is authoritative once a tick commits; movement strategies read
/// it but only the scheduler's commit step writes it.
#[derive(Clone, Debug)]
pub struct PatrolAgent {
    pub entity:       EntityId,
    pub position:     Cell,
    pub visited:      VisitedCells,
    pub can_spot:     bool,
    pub sight_range:  f32,
    pub detection:    Detection,
    pub boundary:     Option<Polygon>,
    pub path:         Option<PathAssignment>,
    /// Cells left while chasing, most recent last.
    pub return_stack: Vec<Cell>,
    pub stall:        StallCounter,
    pub rng:          AgentRng,
    pub flags:        AgentFlags,
}

impl PatrolAgent {
    /// A fresh Idle record standing on `position`.
    pub fn new(entity: EntityId, position: Cell, flags: AgentFlags, config: &PatrolConfig) -> Self {
        Self {
            entity,
            position,
            visited: VisitedCells::new(position),
            can_spot: flags.spotting_enabled,
            sight_range: 0.0,
            detection: Detection::new(),
            boundary: None,
            path: None,
            return_stack: Vec::new(),
            stall: StallCounter::default(),
            rng: AgentRng::new(config.seed, entity),
            flags,
        }
    }

    pub fn with_sight(mut self, range: f32) -> Self {
        self.sight_range = range;
        self
    }

    pub fn with_boundary(mut self, boundary: Option<Polygon>) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_path(mut self, path: Option<PathAssignment>) -> Self {
        self.path = path;
        self
    }

    /// Whether `previous` describes the same patrol setup, so its movement
    /// memory still applies.  Path followers walk their route regardless of
    /// zones, so only explorers compare boundaries.
    fn same_setup(&self, previous: &PatrolAgent) -> bool {
        let same_path = match (&self.path, &previous.path) {
            (Some(a), Some(b)) => a.same_route(b),
            (None, None) => true,
            _ => false,
        };
        self.entity == previous.entity
            && self.flags == previous.flags
            && (self.flags.path_follower || self.boundary == previous.boundary)
            && same_path
    }

    /// Carry movement memory over from the record this one replaces.
    /// Returns `false` (and takes nothing) when the setup changed.
    pub fn inherit(&mut self, previous: PatrolAgent) -> bool {
        if !self.same_setup(&previous) {
            return false;
        }
        self.visited = previous.visited;
        self.visited.insert(self.position);
        self.return_stack = previous.return_stack;
        self.path = previous.path;
        self.stall = previous.stall;
        self.rng = previous.rng;
        true
    }
}
