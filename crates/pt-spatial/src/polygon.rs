//! Patrol-zone polygons and a spatial index over them.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps each zone's bounding box to its declaration
//! index.  The roster uses it to find the zones that might contain a
//! patroller before running the exact (and more expensive) point-in-polygon
//! test through the geometry adapter.

use rstar::RTree;
use rstar::primitives::{GeomWithData, Rectangle};

use pt_core::Point;

// ── Polygon ───────────────────────────────────────────────────────────────────

/// A simple polygon in world units.  Closed implicitly: the last vertex
/// connects back to the first.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Axis-aligned rectangle with its top-left corner at `(x, y)`.
    pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(vec![
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
        ])
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Even-odd ray-casting containment test.  Polygons with fewer than three
    /// vertices contain nothing.
    pub fn contains(&self, p: Point) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (a, b) = (self.points[i], self.points[j]);
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// `(min, max)` corners of the bounding box, or `None` when empty.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.points.first()?;
        let init = (first, first);
        Some(self.points.iter().fold(init, |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

// ── ZoneIndex ─────────────────────────────────────────────────────────────────

type ZoneEntry = GeomWithData<Rectangle<[f32; 2]>, usize>;

/// Bounding-box index over a list of zones, returning candidate zone indices
/// in declaration order.
pub struct ZoneIndex {
    tree: RTree<ZoneEntry>,
}

impl ZoneIndex {
    /// Bulk-load the bounding boxes of `zones`.  Empty polygons are skipped.
    pub fn build(zones: &[Polygon]) -> Self {
        let entries: Vec<ZoneEntry> = zones
            .iter()
            .enumerate()
            .filter_map(|(i, zone)| {
                let (lo, hi) = zone.bounds()?;
                let rect = Rectangle::from_corners([lo.x, lo.y], [hi.x, hi.y]);
                Some(GeomWithData::new(rect, i))
            })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    /// Indices of zones whose bounding box contains `p`, ascending.
    pub fn candidates_at(&self, p: Point) -> Vec<usize> {
        let mut hits: Vec<usize> = self
            .tree
            .locate_all_at_point(&[p.x, p.y])
            .map(|e| e.data)
            .collect();
        hits.sort_unstable();
        hits
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
