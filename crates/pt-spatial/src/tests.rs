//! Unit tests for pt-spatial.

use pt_core::{Cell, Point};

use crate::{CollisionKind, Geometry, GridGeometry, OccupancyLedger, Polygon, ZoneIndex, candidates};

// ── GridGeometry ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid_tests {
    use super::*;

    #[test]
    fn center_of_square() {
        let g = GridGeometry::new(100);
        assert_eq!(g.center(Point::new(0.0, 0.0)), Point::new(50.0, 50.0));
        assert_eq!(g.center(Point::new(199.0, 101.0)), Point::new(150.0, 150.0));
        assert_eq!(g.cell_center(Cell::new(-100, 0)), Point::new(-50.0, 50.0));
    }

    #[test]
    fn snap_rounds_to_nearest_corner() {
        let g = GridGeometry::new(100);
        assert_eq!(g.snap(Point::new(149.0, 51.0)), Cell::new(100, 100));
        assert_eq!(g.snap(Point::new(-40.0, 0.0)), Cell::new(0, 0));
    }

    #[test]
    fn distance_in_grid_units() {
        let g = GridGeometry::new(100).with_units_per_cell(5.0);
        let d = g.distance(Point::new(50.0, 50.0), Point::new(350.0, 50.0));
        assert!((d - 15.0).abs() < 1e-4, "got {d}");
    }

    #[test]
    fn wall_blocks_movement_and_sight() {
        let g = GridGeometry::new(100).with_walls([Cell::new(200, 0)]);
        let from = Point::new(50.0, 50.0);
        let to = Point::new(350.0, 50.0);
        assert!(g.collides(from, to, CollisionKind::Movement));
        assert!(g.collides(from, to, CollisionKind::Sight));
        assert!(!g.collides(from, Point::new(150.0, 50.0), CollisionKind::Movement));
    }

    #[test]
    fn window_blocks_movement_only() {
        let g = GridGeometry::new(100).with_windows([Cell::new(100, 0)]);
        let from = Point::new(50.0, 50.0);
        let to = Point::new(250.0, 50.0);
        assert!(g.collides(from, to, CollisionKind::Movement));
        assert!(!g.collides(from, to, CollisionKind::Sight));
    }

    #[test]
    fn starting_square_never_blocks() {
        let g = GridGeometry::new(1).with_walls([Cell::new(0, 0)]);
        assert!(!g.collides(Point::new(0.5, 0.5), Point::new(1.5, 0.5), CollisionKind::Movement));
    }

    #[test]
    fn line_includes_both_ends() {
        let squares = crate::grid::line_squares_for_test((0, 0), (3, 1));
        assert_eq!(squares.first(), Some(&(0, 0)));
        assert_eq!(squares.last(), Some(&(3, 1)));
        assert_eq!(squares.len(), 4);
    }
}

// ── Polygon / ZoneIndex ───────────────────────────────────────────────────────

#[cfg(test)]
mod polygon_tests {
    use super::*;

    #[test]
    fn rect_contains() {
        let r = Polygon::rect(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(5.0, 5.0)));
        assert!(!r.contains(Point::new(15.0, 5.0)));
        assert!(!r.contains(Point::new(5.0, -1.0)));
    }

    #[test]
    fn concave_polygon() {
        // U shape: the notch at x ∈ (3, 7), y < 7 is outside.
        let u = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 7.0),
            Point::new(7.0, 7.0),
            Point::new(7.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]);
        assert!(u.contains(Point::new(1.0, 1.0)));
        assert!(!u.contains(Point::new(5.0, 3.0)));
        assert!(u.contains(Point::new(5.0, 9.0)));
    }

    #[test]
    fn degenerate_polygon_contains_nothing() {
        let line = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)]);
        assert!(!line.contains(Point::new(1.0, 1.0)));
    }

    #[test]
    fn bounds() {
        let r = Polygon::rect(-5.0, 2.0, 10.0, 3.0);
        assert_eq!(r.bounds(), Some((Point::new(-5.0, 2.0), Point::new(5.0, 5.0))));
        assert_eq!(Polygon::default().bounds(), None);
    }

    #[test]
    fn zone_index_returns_declaration_order() {
        let zones = vec![
            Polygon::rect(0.0, 0.0, 100.0, 100.0),
            Polygon::rect(500.0, 500.0, 10.0, 10.0),
            Polygon::rect(50.0, 50.0, 100.0, 100.0),
            Polygon::default(),
        ];
        let index = ZoneIndex::build(&zones);
        assert_eq!(index.len(), 3);
        assert_eq!(index.candidates_at(Point::new(75.0, 75.0)), vec![0, 2]);
        assert_eq!(index.candidates_at(Point::new(505.0, 505.0)), vec![1]);
        assert!(index.candidates_at(Point::new(-1.0, -1.0)).is_empty());
    }
}

// ── Direction Enumerator ──────────────────────────────────────────────────────

#[cfg(test)]
mod direction_tests {
    use super::*;

    #[test]
    fn four_neighbours_unit_grid() {
        let g = GridGeometry::new(1);
        let cells: Vec<Cell> = candidates(&g, Cell::new(0, 0), false)
            .iter()
            .map(|c| c.cell)
            .collect();
        assert_eq!(
            cells,
            vec![Cell::new(1, 0), Cell::new(-1, 0), Cell::new(0, 1), Cell::new(0, -1)]
        );
    }

    #[test]
    fn eight_neighbours_orthogonal_first() {
        let g = GridGeometry::new(100);
        let cands = candidates(&g, Cell::new(100, 100), true);
        assert_eq!(cands.len(), 8);
        assert_eq!(cands[0].cell, Cell::new(200, 100));
        assert_eq!(cands[4].cell, Cell::new(200, 200));
        assert_eq!(cands[7].cell, Cell::new(200, 0));
    }

    #[test]
    fn centers_are_snapped() {
        let g = GridGeometry::new(100);
        let cands = candidates(&g, Cell::new(0, 0), false);
        assert_eq!(cands[0].center, Point::new(150.0, 50.0));
        assert_eq!(cands[3].center, Point::new(50.0, -50.0));
    }

    #[test]
    fn deterministic() {
        let g = GridGeometry::new(10);
        assert_eq!(
            candidates(&g, Cell::new(30, 40), true),
            candidates(&g, Cell::new(30, 40), true)
        );
    }
}

// ── OccupancyLedger ───────────────────────────────────────────────────────────

#[cfg(test)]
mod ledger_tests {
    use super::*;

    #[test]
    fn seed_replaces_previous_claims() {
        let mut ledger = OccupancyLedger::new();
        ledger.claim(Cell::new(9, 9));
        ledger.seed([Cell::new(0, 0), Cell::new(1, 0)]);
        assert!(!ledger.is_claimed(Cell::new(9, 9)));
        assert!(ledger.is_claimed(Cell::new(0, 0)));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn claims_are_counted() {
        let mut ledger = OccupancyLedger::new();
        ledger.seed([Cell::new(0, 0), Cell::new(0, 0)]);
        assert_eq!(ledger.claims_on(Cell::new(0, 0)), 2);
        ledger.release(Cell::new(0, 0));
        assert!(ledger.is_claimed(Cell::new(0, 0)), "second body still there");
        ledger.release(Cell::new(0, 0));
        assert!(!ledger.is_claimed(Cell::new(0, 0)));
    }

    #[test]
    fn transfer_moves_claim() {
        let mut ledger = OccupancyLedger::new();
        ledger.seed([Cell::new(0, 0)]);
        ledger.transfer(Cell::new(0, 0), Cell::new(1, 0));
        assert!(!ledger.is_claimed(Cell::new(0, 0)));
        assert!(ledger.is_claimed(Cell::new(1, 0)));
    }

    #[test]
    fn release_unclaimed_is_noop() {
        let mut ledger = OccupancyLedger::new();
        ledger.release(Cell::new(3, 3));
        assert!(ledger.is_empty());
    }
}
