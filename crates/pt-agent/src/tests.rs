//! Unit tests for pt-agent.

use pt_core::{Cell, EntityId, PatrolConfig, Point};
use pt_detect::{AllowAll, Detector, NoopSink, Viewer};
use pt_schedule::PatrolPath;
use pt_spatial::{Geometry, GridGeometry, OccupancyLedger, Polygon};

use crate::{
    AgentFlags, EntityKind, EntitySnapshot, PatrolAgent, Roster, RosterUpdate, StallCounter,
    VisitedCells, WorldSnapshot,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn guard(id: u32, x: i32, y: i32) -> EntitySnapshot {
    EntitySnapshot::new(EntityId(id), Cell::new(x, y))
        .with_flags(AgentFlags::explorer(true))
        .with_sight(5.0)
}

fn player(id: u32, x: i32, y: i32) -> EntitySnapshot {
    EntitySnapshot::new(EntityId(id), Cell::new(x, y)).with_kind(EntityKind::Character)
}

fn world(entities: Vec<EntitySnapshot>) -> WorldSnapshot {
    WorldSnapshot { entities, ..WorldSnapshot::default() }
}

/// Put the roster's first agent into Spotted via a zero-delay sighting.
fn alert_first(roster: &mut Roster, g: &GridGeometry) {
    let cfg = PatrolConfig { alert_delay_ms: 0, ..PatrolConfig::default() };
    let targets = roster.targets().to_vec();
    let agent = &mut roster.agents_mut()[0];
    let viewer = Viewer {
        entity:      agent.entity,
        center:      g.cell_center(agent.position),
        sight_range: agent.sight_range,
    };
    let (mut gate, mut sink) = (AllowAll, NoopSink);
    Detector::new(g, &cfg, &mut gate, &mut sink).observe(&viewer, &mut agent.detection, &targets);
}

// ── VisitedCells / StallCounter ───────────────────────────────────────────────

#[cfg(test)]
mod memory_tests {
    use super::*;

    #[test]
    fn visited_keeps_insertion_order() {
        let mut v = VisitedCells::new(Cell::new(0, 0));
        assert!(v.insert(Cell::new(1, 0)));
        assert!(!v.insert(Cell::new(0, 0)));
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![Cell::new(0, 0), Cell::new(1, 0)]);
    }

    #[test]
    fn visited_reset_keeps_one_cell() {
        let mut v = VisitedCells::new(Cell::new(0, 0));
        v.insert(Cell::new(1, 0));
        v.reset_to(Cell::new(1, 0));
        assert_eq!(v.len(), 1);
        assert!(v.contains(Cell::new(1, 0)));
        assert!(!v.contains(Cell::new(0, 0)));
    }

    #[test]
    fn stall_counts_consecutive_holds_per_cell() {
        let mut s = StallCounter::default();
        assert_eq!(s.bump(Cell::new(0, 0)), 1);
        assert_eq!(s.bump(Cell::new(0, 0)), 2);
        assert_eq!(s.bump(Cell::new(1, 0)), 1);
        s.reset();
        assert_eq!(s.count(), 0);
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod snapshot_tests {
    use super::*;

    #[test]
    fn eligibility_and_targets() {
        let mut downed = guard(3, 0, 0);
        downed.incapacitated = true;
        let owned = EntitySnapshot { player_owned: true, ..EntitySnapshot::new(EntityId(4), Cell::new(0, 0)) };

        assert!(guard(1, 0, 0).patrols());
        assert!(!downed.patrols());
        assert!(player(2, 0, 0).is_target());
        assert!(owned.is_target());
        assert!(!guard(1, 0, 0).is_target());
    }

    #[test]
    fn set_cell_moves_known_entity() {
        let mut w = world(vec![guard(1, 0, 0)]);
        assert!(w.set_cell(EntityId(1), Cell::new(2, 0)));
        assert_eq!(w.get(EntityId(1)).map(|e| e.cell), Some(Cell::new(2, 0)));
        assert!(!w.set_cell(EntityId(9), Cell::new(0, 0)));
    }
}

// ── Roster ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod roster_tests {
    use super::*;

    #[test]
    fn rebuild_picks_eligible_entities() {
        let g = GridGeometry::new(1);
        let mut other = EntitySnapshot::new(EntityId(5), Cell::new(9, 9));
        other.kind = EntityKind::Other;
        let w = world(vec![guard(1, 0, 0), player(2, 4, 0), other, guard(3, 7, 7)]);

        let mut roster = Roster::new();
        let update = roster.refresh(&w, &g, &PatrolConfig::default());
        assert_eq!(update, RosterUpdate::Rebuilt { agents: 2 });
        assert_eq!(roster.targets().len(), 1);
        assert_eq!(roster.targets()[0].entity, EntityId(2));

        let a = roster.get(EntityId(1)).unwrap();
        assert!(a.visited.contains(Cell::new(0, 0)));
        assert!(a.can_spot);
        assert_eq!(a.sight_range, 5.0);
    }

    #[test]
    fn stable_while_alerting() {
        let g = GridGeometry::new(1);
        let cfg = PatrolConfig::default();
        let mut roster = Roster::new();
        roster.refresh(&world(vec![guard(1, 0, 0), player(2, 3, 0)]), &g, &cfg);
        alert_first(&mut roster, &g);
        assert!(roster.is_alerting());

        // A new guard appears and the player moves: records stay, targets follow.
        let w = world(vec![guard(1, 0, 0), player(2, 2, 0), guard(6, 8, 8)]);
        assert_eq!(roster.refresh(&w, &g, &cfg), RosterUpdate::Retained);
        assert_eq!(roster.len(), 1);
        assert!(roster.is_alerting());
        assert_eq!(roster.targets()[0].cell, Cell::new(2, 0));
    }

    #[test]
    fn rebuild_carries_movement_memory() {
        let g = GridGeometry::new(1);
        let cfg = PatrolConfig::default();
        let mut roster = Roster::new();
        roster.refresh(&world(vec![guard(1, 0, 0)]), &g, &cfg);
        roster.agents_mut()[0].visited.insert(Cell::new(1, 0));
        roster.agents_mut()[0].return_stack.push(Cell::new(1, 0));

        roster.refresh(&world(vec![guard(1, 0, 1)]), &g, &cfg);
        let a = &roster.agents()[0];
        assert_eq!(a.position, Cell::new(0, 1));
        assert!(a.visited.contains(Cell::new(1, 0)));
        assert!(a.visited.contains(Cell::new(0, 1)));
        assert_eq!(a.return_stack, vec![Cell::new(1, 0)]);
    }

    #[test]
    fn config_change_drops_memory() {
        let g = GridGeometry::new(1);
        let mut roster = Roster::new();
        roster.refresh(&world(vec![guard(1, 0, 0)]), &g, &PatrolConfig::default());
        roster.agents_mut()[0].visited.insert(Cell::new(1, 0));

        let changed = PatrolConfig { diagonals: true, ..PatrolConfig::default() };
        roster.refresh(&world(vec![guard(1, 0, 0)]), &g, &changed);
        assert!(!roster.agents()[0].visited.contains(Cell::new(1, 0)));
    }

    #[test]
    fn boundary_is_first_containing_zone() {
        let g = GridGeometry::new(1);
        let mut w = world(vec![guard(1, 2, 2), guard(2, 50, 50)]);
        w.zones = vec![
            Polygon::rect(20.0, 20.0, 5.0, 5.0),
            Polygon::rect(0.0, 0.0, 10.0, 10.0),
            Polygon::rect(0.0, 0.0, 4.0, 4.0),
        ];
        let mut roster = Roster::new();
        roster.refresh(&w, &g, &PatrolConfig::default());
        assert_eq!(roster.get(EntityId(1)).unwrap().boundary, Some(w.zones[1].clone()));
        assert_eq!(roster.get(EntityId(2)).unwrap().boundary, None);
    }

    #[test]
    fn path_assignment_single_and_multi() {
        let g = GridGeometry::new(1);
        let route = |x: f32| PatrolPath::new("beat", vec![Point::new(x, 0.0), Point::new(x, 3.0)]);
        let single = EntitySnapshot::new(EntityId(1), Cell::new(0, 0))
            .with_flags(AgentFlags::follower("beat", false));
        let multi = EntitySnapshot::new(EntityId(2), Cell::new(0, 0))
            .with_flags(AgentFlags { multi_path: true, ..AgentFlags::follower("beat", false) });
        let lost = EntitySnapshot::new(EntityId(3), Cell::new(0, 0))
            .with_flags(AgentFlags::follower("nowhere", false));

        let mut w = world(vec![single, multi, lost]);
        w.paths = vec![route(1.0), PatrolPath::new("other", vec![Point::new(9.0, 9.0)]), route(5.0)];

        let mut roster = Roster::new();
        roster.refresh(&w, &g, &PatrolConfig::default());
        assert_eq!(roster.get(EntityId(1)).unwrap().path.as_ref().unwrap().path_count(), 1);
        assert_eq!(roster.get(EntityId(2)).unwrap().path.as_ref().unwrap().path_count(), 2);
        assert!(roster.get(EntityId(3)).unwrap().path.as_ref().unwrap().is_empty());
    }

    #[test]
    fn seed_ledger_claims_agents_and_targets() {
        let g = GridGeometry::new(1);
        let mut roster = Roster::new();
        roster.refresh(&world(vec![guard(1, 0, 0), player(2, 3, 0)]), &g, &PatrolConfig::default());

        let mut ledger = OccupancyLedger::new();
        ledger.claim(Cell::new(7, 7));
        roster.seed_ledger(&mut ledger);
        assert!(ledger.is_claimed(Cell::new(0, 0)));
        assert!(ledger.is_claimed(Cell::new(3, 0)));
        assert!(!ledger.is_claimed(Cell::new(7, 7)));
    }

    #[test]
    fn follower_keeps_memory_across_zone_edges() {
        let g = GridGeometry::new(1);
        let walker = |x: i32| {
            EntitySnapshot::new(EntityId(1), Cell::new(x, 0)).with_flags(AgentFlags::follower("beat", false))
        };
        let mut w = world(vec![walker(0)]);
        w.zones = vec![Polygon::rect(-1.0, -1.0, 3.0, 3.0)];
        w.paths = vec![PatrolPath::new("beat", vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0)])];

        let mut roster = Roster::new();
        let cfg = PatrolConfig::default();
        roster.refresh(&w, &g, &cfg);
        assert!(roster.agents()[0].boundary.is_some());
        roster.agents_mut()[0].return_stack.push(Cell::new(0, 0));

        // Stepped out of the zone: the boundary changes, the memory stays.
        w.entities = vec![walker(5)];
        roster.refresh(&w, &g, &cfg);
        let a = &roster.agents()[0];
        assert!(a.boundary.is_none());
        assert_eq!(a.return_stack, vec![Cell::new(0, 0)]);
    }

    #[test]
    fn inherit_refuses_changed_setup() {
        let cfg = PatrolConfig::default();
        let mut old = PatrolAgent::new(EntityId(1), Cell::new(0, 0), AgentFlags::explorer(false), &cfg);
        old.return_stack.push(Cell::new(1, 0));
        let mut fresh = PatrolAgent::new(EntityId(1), Cell::new(0, 0), AgentFlags::explorer(true), &cfg);
        assert!(!fresh.inherit(old));
        assert!(fresh.return_stack.is_empty());
    }
}
