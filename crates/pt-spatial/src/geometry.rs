//! The geometry adapter trait.
//!
//! # Pluggability
//!
//! Grid snapping, distance measurement, and wall collision belong to the host
//! (a tabletop canvas, a tile map, a navmesh).  The engine calls them through
//! the [`Geometry`] trait so hosts can plug in their own implementation
//! without touching the engine core.  [`GridGeometry`][crate::GridGeometry]
//! is a complete square-grid implementation used by the tests and the demo.
//!
//! All methods are pure queries.

use pt_core::{Cell, Point};

use crate::Polygon;

/// What a collision test is asked on behalf of.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CollisionKind {
    /// Can a body move from `from` to `to`?
    Movement,
    /// Can an observer at `from` see `to`?
    Sight,
}

/// Host-supplied spatial primitives.
pub trait Geometry {
    /// Side length of one grid square in world units.
    fn grid_size(&self) -> i32;

    /// Snap an arbitrary point to the nearest grid-aligned cell corner.
    fn snap(&self, point: Point) -> Cell;

    /// Center of the grid square containing `point`.
    fn center(&self, point: Point) -> Point;

    /// Distance between two points in grid-distance units (the unit vision
    /// ranges and the chase radius are expressed in).
    fn distance(&self, a: Point, b: Point) -> f32;

    /// `true` if something blocks the straight line from `from` to `to`.
    fn collides(&self, from: Point, to: Point, kind: CollisionKind) -> bool;

    /// `true` if `point` lies inside `polygon`.
    fn polygon_contains(&self, polygon: &Polygon, point: Point) -> bool {
        polygon.contains(point)
    }

    /// Center of the square whose corner is `cell`.
    fn cell_center(&self, cell: Cell) -> Point {
        self.center(cell.as_point())
    }
}

impl<G: Geometry + ?Sized> Geometry for &G {
    fn grid_size(&self) -> i32 {
        (**self).grid_size()
    }

    fn snap(&self, point: Point) -> Cell {
        (**self).snap(point)
    }

    fn center(&self, point: Point) -> Point {
        (**self).center(point)
    }

    fn distance(&self, a: Point, b: Point) -> f32 {
        (**self).distance(a, b)
    }

    fn collides(&self, from: Point, to: Point, kind: CollisionKind) -> bool {
        (**self).collides(from, to, kind)
    }

    fn polygon_contains(&self, polygon: &Polygon, point: Point) -> bool {
        (**self).polygon_contains(polygon, point)
    }
}
