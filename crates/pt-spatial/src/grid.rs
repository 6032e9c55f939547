//! Square-grid reference implementation of [`Geometry`].
//!
//! # Walls and windows
//!
//! Obstacles are whole grid squares.  A *wall* blocks both movement and
//! sight; a *window* blocks movement only.  A line is blocked when any square
//! it passes through after the starting square is an obstacle of the
//! relevant kind.  Squares along the line are enumerated with Bresenham's
//! algorithm over square indices, so diagonal steps may cut corners.

use std::collections::HashSet;

use pt_core::{Cell, Point};

use crate::{CollisionKind, Geometry};

/// A square grid with optional obstacle squares.
#[derive(Clone, Debug)]
pub struct GridGeometry {
    grid_size:      i32,
    units_per_cell: f32,
    walls:          HashSet<(i32, i32)>,
    windows:        HashSet<(i32, i32)>,
}

impl GridGeometry {
    /// A grid of `grid_size`-unit squares (clamped to at least 1), with one
    /// grid-distance unit per square and no obstacles.
    pub fn new(grid_size: i32) -> Self {
        Self {
            grid_size:      grid_size.max(1),
            units_per_cell: 1.0,
            walls:          HashSet::new(),
            windows:        HashSet::new(),
        }
    }

    /// Set how many grid-distance units one square spans (e.g. 5 ft).
    pub fn with_units_per_cell(mut self, units: f32) -> Self {
        self.units_per_cell = units;
        self
    }

    /// Mark the square containing `cell` as a wall.
    pub fn add_wall(&mut self, cell: Cell) {
        let key = self.square_of(cell.as_point());
        self.walls.insert(key);
    }

    /// Mark the square containing `cell` as a window.
    pub fn add_window(&mut self, cell: Cell) {
        let key = self.square_of(cell.as_point());
        self.windows.insert(key);
    }

    pub fn with_walls(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        for cell in cells {
            self.add_wall(cell);
        }
        self
    }

    pub fn with_windows(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        for cell in cells {
            self.add_window(cell);
        }
        self
    }

    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls.contains(&self.square_of(cell.as_point()))
    }

    /// Integer square index of the square containing `p`.
    #[inline]
    fn square_of(&self, p: Point) -> (i32, i32) {
        let g = self.grid_size as f32;
        ((p.x / g).floor() as i32, (p.y / g).floor() as i32)
    }

    fn blocks(&self, square: (i32, i32), kind: CollisionKind) -> bool {
        match kind {
            CollisionKind::Sight    => self.walls.contains(&square),
            CollisionKind::Movement => {
                self.walls.contains(&square) || self.windows.contains(&square)
            }
        }
    }
}

impl Geometry for GridGeometry {
    fn grid_size(&self) -> i32 {
        self.grid_size
    }

    fn snap(&self, point: Point) -> Cell {
        let g = self.grid_size as f32;
        Cell::new(
            ((point.x / g).round() * g) as i32,
            ((point.y / g).round() * g) as i32,
        )
    }

    fn center(&self, point: Point) -> Point {
        let (sx, sy) = self.square_of(point);
        let g = self.grid_size as f32;
        Point::new(sx as f32 * g + g * 0.5, sy as f32 * g + g * 0.5)
    }

    fn distance(&self, a: Point, b: Point) -> f32 {
        a.distance(b) / self.grid_size as f32 * self.units_per_cell
    }

    fn collides(&self, from: Point, to: Point, kind: CollisionKind) -> bool {
        let start = self.square_of(from);
        let end = self.square_of(to);
        line_squares(start, end)
            .into_iter()
            .skip(1)
            .any(|sq| self.blocks(sq, kind))
    }
}

/// Squares on the Bresenham line from `a` to `b`, both ends included.
fn line_squares(a: (i32, i32), b: (i32, i32)) -> Vec<(i32, i32)> {
    let dx = (b.0 - a.0).abs();
    let dy = -(b.1 - a.1).abs();
    let sx = if a.0 < b.0 { 1 } else { -1 };
    let sy = if a.1 < b.1 { 1 } else { -1 };

    let (mut x, mut y) = a;
    let mut err = dx + dy;
    let mut out = Vec::with_capacity((dx - dy) as usize + 1);
    loop {
        out.push((x, y));
        if x == b.0 && y == b.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    out
}

#[cfg(test)]
pub(crate) fn line_squares_for_test(a: (i32, i32), b: (i32, i32)) -> Vec<(i32, i32)> {
    line_squares(a, b)
}
