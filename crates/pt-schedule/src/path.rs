//! Patrol paths and the per-agent path cursor.
//!
//! A [`PatrolPath`] is what the host provides: a named polyline or polygon in
//! world units.  A [`PathAssignment`] is what a path follower carries: the
//! grid-snapped node lists of one or more paths plus a cursor
//! `(path_index, node_index)` pointing at the node the agent heads for next.

use pt_core::{AgentRng, Cell, Point};
use pt_spatial::Geometry;

// ── PatrolPath ────────────────────────────────────────────────────────────────

/// A named route drawn on the host's map.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatrolPath {
    pub name:     String,
    pub vertices: Vec<Point>,
}

impl PatrolPath {
    pub fn new(name: impl Into<String>, vertices: Vec<Point>) -> Self {
        Self { name: name.into(), vertices }
    }

    /// Grid-snapped node sequence.  A closed loop's duplicated closing vertex
    /// is removed so the loop's start is visited once per lap.
    pub fn nodes<G: Geometry + ?Sized>(&self, geometry: &G) -> Vec<Cell> {
        let mut nodes: Vec<Cell> = self.vertices.iter().map(|&v| geometry.snap(v)).collect();
        if nodes.len() > 1 && nodes.first() == nodes.last() {
            nodes.pop();
        }
        nodes
    }
}

// ── PathAssignment ────────────────────────────────────────────────────────────

/// Node lists plus cursor for one path follower.
#[derive(Clone, Debug, PartialEq)]
pub struct PathAssignment {
    /// Non-empty node lists in patrol order.
    paths:      Vec<Vec<Cell>>,
    path_index: usize,
    /// `None` until the first tick initialises it.
    node_index: Option<usize>,
    /// Node the cursor starts on when random starts are disabled.
    start_node: usize,
}

impl PathAssignment {
    /// Build from node lists.  Empty lists are dropped; if nothing remains the
    /// assignment [`is_empty`](Self::is_empty) and the agent stalls.
    pub fn new(paths: Vec<Vec<Cell>>, start_node: usize) -> Self {
        Self {
            paths: paths.into_iter().filter(|p| !p.is_empty()).collect(),
            path_index: 0,
            node_index: None,
            start_node,
        }
    }

    /// Snap every path in `paths` and build an assignment from them.
    pub fn from_paths<'a, G: Geometry + ?Sized>(
        paths:      impl IntoIterator<Item = &'a PatrolPath>,
        geometry:   &G,
        start_node: usize,
    ) -> Self {
        Self::new(paths.into_iter().map(|p| p.nodes(geometry)).collect(), start_node)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    pub fn path_index(&self) -> usize {
        self.path_index
    }

    pub fn node_index(&self) -> Option<usize> {
        self.node_index
    }

    /// Same routes and start node, regardless of cursor position.
    pub fn same_route(&self, other: &PathAssignment) -> bool {
        self.paths == other.paths && self.start_node == other.start_node
    }

    /// Initialise the cursor if unset.  The first node is random when
    /// `random_start` is set, otherwise the configured start node (wrapped to
    /// the path length).  An agent already standing on its first node moves
    /// on to the following one.
    pub fn ensure_cursor(&mut self, rng: &mut AgentRng, random_start: bool, position: Cell) {
        if self.node_index.is_some() || self.is_empty() {
            return;
        }
        let len = self.paths[self.path_index].len();
        let first = if random_start {
            rng.gen_range(0..len)
        } else {
            self.start_node % len
        };
        self.node_index = Some(first);
        if self.peek() == Some(position) {
            self.advance();
        }
    }

    /// The node the agent heads for next.
    pub fn peek(&self) -> Option<Cell> {
        let nodes = self.paths.get(self.path_index)?;
        nodes.get(self.node_index?).copied()
    }

    /// Step the cursor one node, wrapping to the next path after the last
    /// node and to the first path after the last path.
    pub fn advance(&mut self) {
        let Some(node) = self.node_index else { return };
        let len = self.paths[self.path_index].len();
        if node + 1 < len {
            self.node_index = Some(node + 1);
        } else {
            self.path_index = (self.path_index + 1) % self.paths.len();
            self.node_index = Some(0);
        }
    }
}
