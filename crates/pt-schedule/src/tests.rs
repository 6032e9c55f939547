//! Unit tests for pt-schedule.

use std::io::Cursor;

use pt_core::{AgentRng, Cell, EntityId, Point, Tick};
use pt_spatial::GridGeometry;

use crate::{PathAssignment, PatrolPath, TimerEvent, TimerQueue, load_paths_reader};

fn square_path(name: &str) -> PatrolPath {
    PatrolPath::new(
        name,
        vec![
            Point::new(0.0, 0.0),
            Point::new(300.0, 0.0),
            Point::new(300.0, 300.0),
            Point::new(0.0, 300.0),
            Point::new(0.0, 0.0),
        ],
    )
}

// ── TimerQueue ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod timer_tests {
    use super::*;

    #[test]
    fn drains_due_events_in_order() {
        let mut q = TimerQueue::new();
        q.push(Tick(5), TimerEvent::ArmPatrol);
        q.push(Tick(2), TimerEvent::AlertTimeout { entity: EntityId(1), serial: 7 });
        q.push(Tick(9), TimerEvent::ArmPatrol);
        assert_eq!(q.len(), 3);

        let due = q.drain_due(Tick(5));
        assert_eq!(
            due,
            vec![
                TimerEvent::AlertTimeout { entity: EntityId(1), serial: 7 },
                TimerEvent::ArmPatrol,
            ]
        );
        assert_eq!(q.len(), 1);
        assert_eq!(q.next_tick(), Some(Tick(9)));
    }

    #[test]
    fn nothing_due_before_deadline() {
        let mut q: TimerQueue = TimerQueue::new();
        q.push(Tick(3), TimerEvent::ArmPatrol);
        assert!(q.drain_due(Tick(2)).is_empty());
        assert_eq!(q.drain_due(Tick(3)).len(), 1);
        assert!(q.is_empty());
    }

    #[test]
    fn same_tick_keeps_insertion_order() {
        let mut q: TimerQueue<u8> = TimerQueue::new();
        q.push(Tick(1), 1);
        q.push(Tick(1), 2);
        q.push(Tick(1), 3);
        assert_eq!(q.drain_due(Tick(1)), vec![1, 2, 3]);
    }

    #[test]
    fn clear_resets_len() {
        let mut q: TimerQueue = TimerQueue::new();
        q.push(Tick(1), TimerEvent::ArmPatrol);
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.next_tick(), None);
    }
}

// ── PatrolPath / PathAssignment ───────────────────────────────────────────────

#[cfg(test)]
mod path_tests {
    use super::*;

    #[test]
    fn closing_vertex_removed() {
        let g = GridGeometry::new(100);
        let nodes = square_path("loop").nodes(&g);
        assert_eq!(
            nodes,
            vec![Cell::new(0, 0), Cell::new(300, 0), Cell::new(300, 300), Cell::new(0, 300)]
        );
    }

    #[test]
    fn open_path_kept_whole() {
        let g = GridGeometry::new(100);
        let p = PatrolPath::new("line", vec![Point::new(0.0, 0.0), Point::new(200.0, 0.0)]);
        assert_eq!(p.nodes(&g).len(), 2);
    }

    #[test]
    fn vertices_are_snapped() {
        let g = GridGeometry::new(100);
        let p = PatrolPath::new("odd", vec![Point::new(12.0, 190.0)]);
        assert_eq!(p.nodes(&g), vec![Cell::new(0, 200)]);
    }

    #[test]
    fn four_node_loop_returns_to_start() {
        let g = GridGeometry::new(100);
        let mut a = PathAssignment::from_paths([&square_path("loop")], &g, 0);
        let mut rng = AgentRng::new(0, EntityId(0));

        a.ensure_cursor(&mut rng, false, Cell::new(0, 0));
        let mut visited = Vec::new();
        for _ in 0..4 {
            visited.push(a.peek().unwrap());
            a.advance();
        }
        assert_eq!(
            visited,
            vec![Cell::new(300, 0), Cell::new(300, 300), Cell::new(0, 300), Cell::new(0, 0)]
        );
    }

    #[test]
    fn start_node_away_from_agent_is_first_target() {
        let g = GridGeometry::new(100);
        let mut a = PathAssignment::from_paths([&square_path("loop")], &g, 2);
        let mut rng = AgentRng::new(0, EntityId(0));
        a.ensure_cursor(&mut rng, false, Cell::new(900, 900));
        assert_eq!(a.node_index(), Some(2));
        assert_eq!(a.peek(), Some(Cell::new(300, 300)));
    }

    #[test]
    fn random_start_stays_in_range() {
        let g = GridGeometry::new(100);
        for seed in 0..20 {
            let mut a = PathAssignment::from_paths([&square_path("loop")], &g, 0);
            let mut rng = AgentRng::new(seed, EntityId(3));
            a.ensure_cursor(&mut rng, true, Cell::new(900, 900));
            assert!(a.node_index().unwrap() < 4);
        }
    }

    #[test]
    fn wraps_across_paths() {
        let mut a = PathAssignment::new(
            vec![vec![Cell::new(0, 0), Cell::new(1, 0)], vec![Cell::new(5, 5)]],
            0,
        );
        let mut rng = AgentRng::new(0, EntityId(0));
        a.ensure_cursor(&mut rng, false, Cell::new(9, 9));
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(a.peek().unwrap());
            a.advance();
        }
        assert_eq!(
            seen,
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(5, 5), Cell::new(0, 0)]
        );
        assert_eq!(a.path_index(), 0);
    }

    #[test]
    fn empty_node_lists_dropped() {
        let a = PathAssignment::new(vec![vec![], vec![]], 0);
        assert!(a.is_empty());
        assert_eq!(a.peek(), None);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use super::*;

    #[test]
    fn groups_rows_by_path_and_segment() {
        let csv = "\
path,segment,x,y
yard,0,0,0
yard,0,100,0
yard,1,500,500
gate,0,10,10
yard,0,100,100
";
        let paths = load_paths_reader(Cursor::new(csv)).unwrap();
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0].name, "yard");
        assert_eq!(paths[0].vertices.len(), 3);
        assert_eq!(paths[1].name, "yard");
        assert_eq!(paths[1].vertices, vec![Point::new(500.0, 500.0)]);
        assert_eq!(paths[2].name, "gate");
    }

    #[test]
    fn bad_row_is_parse_error() {
        let csv = "path,segment,x,y\nyard,zero,0,0\n";
        assert!(load_paths_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn parse_error_converts_to_core_error() {
        let csv = "path,segment,x,y\nyard,0,NaN,0\n";
        let err: pt_core::PtError = load_paths_reader(Cursor::new(csv)).unwrap_err().into();
        assert!(matches!(err, pt_core::PtError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::load_paths_csv(std::path::Path::new("/nonexistent/paths.csv")).unwrap_err();
        assert!(matches!(err, crate::ScheduleError::Io(_)));
    }

    #[test]
    fn empty_file_yields_no_paths() {
        let csv = "path,segment,x,y\n";
        assert!(load_paths_reader(Cursor::new(csv)).unwrap().is_empty());
    }
}
