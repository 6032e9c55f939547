//! Direction Enumerator: candidate destination cells around a position.
//!
//! Ordering is fixed (orthogonal E, W, S, N, then diagonal SE, NW, SW, NE) so
//! that any downstream reduction, such as "closest to the target, first one
//! wins ties", is reproducible for identical input.

use pt_core::{Cell, Point};

use crate::Geometry;

/// Orthogonal unit steps: east, west, south, north.
pub const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal unit steps: south-east, north-west, south-west, north-east.
pub const DIAGONAL: [(i32, i32); 4] = [(1, 1), (-1, -1), (-1, 1), (1, -1)];

/// One candidate destination: the snapped cell and its snapped center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate {
    pub cell:   Cell,
    pub center: Point,
}

/// Neighbouring cells of `cell`, four or eight depending on `diagonals`.
pub fn candidates<G: Geometry + ?Sized>(geometry: &G, cell: Cell, diagonals: bool) -> Vec<Candidate> {
    let g = geometry.grid_size();
    let origin_center = geometry.cell_center(cell);

    let diagonal: &[(i32, i32)] = if diagonals { &DIAGONAL } else { &[] };

    ORTHOGONAL
        .iter()
        .chain(diagonal)
        .map(|&(dx, dy)| {
            let (ox, oy) = (dx * g, dy * g);
            Candidate {
                cell:   geometry.snap(cell.offset(ox, oy).as_point()),
                center: geometry.center(origin_center.offset(ox as f32, oy as f32)),
            }
        })
        .collect()
}
