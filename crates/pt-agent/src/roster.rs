//! `Roster`: the Agent Registry.
//!
//! # Rebuild rule
//!
//! The roster is rebuilt from the snapshot at the start of every tick unless
//! some agent is Alerted or Spotted.  While a chase is on, rebuilding would
//! reset detection state mid-pursuit, so the records are retained as they
//! are.  Targets, on the other hand, are re-read on every refresh.
//!
//! A rebuild carries movement memory (visited cells, return stack, path
//! cursor, stall counter, RNG) over from the previous record of the same
//! entity, provided neither the engine config nor the agent's own setup
//! changed.

use pt_core::{EntityId, PatrolConfig};
use pt_detect::Target;
use pt_schedule::PathAssignment;
use pt_spatial::{Geometry, OccupancyLedger, Polygon, ZoneIndex};
use tracing::debug;

use crate::{EntitySnapshot, PatrolAgent, WorldSnapshot};

/// What [`Roster::refresh`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RosterUpdate {
    Rebuilt { agents: usize },
    /// Some agent is alerting; records were left untouched.
    Retained,
}

/// Current patrol records and targets.
#[derive(Debug, Default)]
pub struct Roster {
    agents:      Vec<PatrolAgent>,
    targets:     Vec<Target>,
    /// Config the current records were built under.
    built_under: Option<PatrolConfig>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild or retain the records, and refresh targets from `snapshot`.
    pub fn refresh<G: Geometry + ?Sized>(
        &mut self,
        snapshot: &WorldSnapshot,
        geometry: &G,
        config:   &PatrolConfig,
    ) -> RosterUpdate {
        self.targets = snapshot
            .entities
            .iter()
            .filter(|e| e.is_target())
            .map(|e| Target { entity: e.id, cell: e.cell, center: geometry.cell_center(e.cell) })
            .collect();

        if self.is_alerting() {
            debug!("roster retained: a patroller is alerting");
            return RosterUpdate::Retained;
        }

        let carry = self.built_under.as_ref() == Some(config);
        let mut previous = std::mem::take(&mut self.agents);
        let zones = ZoneIndex::build(&snapshot.zones);

        for entity in snapshot.entities.iter().filter(|e| e.patrols()) {
            let mut agent = build_agent(entity, snapshot, &zones, geometry, config);
            if carry {
                if let Some(i) = previous.iter().position(|a| a.entity == entity.id) {
                    agent.inherit(previous.swap_remove(i));
                }
            }
            self.agents.push(agent);
        }
        self.built_under = Some(config.clone());

        debug!(agents = self.agents.len(), targets = self.targets.len(), "roster rebuilt");
        RosterUpdate::Rebuilt { agents: self.agents.len() }
    }

    /// Claim every agent and target position in `ledger`, dropping any
    /// earlier claims.
    pub fn seed_ledger(&self, ledger: &mut OccupancyLedger) {
        ledger.seed(
            self.agents
                .iter()
                .map(|a| a.position)
                .chain(self.targets.iter().map(|t| t.cell)),
        );
    }

    /// Some agent is Alerted or Spotted.
    pub fn is_alerting(&self) -> bool {
        self.agents.iter().any(|a| a.detection.is_alerting())
    }

    pub fn agents(&self) -> &[PatrolAgent] {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut [PatrolAgent] {
        &mut self.agents
    }

    /// Agents and targets borrowed together, for a pass that mutates agents
    /// while reading targets.
    pub fn parts_mut(&mut self) -> (&mut [PatrolAgent], &[Target]) {
        (&mut self.agents, &self.targets)
    }

    pub fn get(&self, entity: EntityId) -> Option<&PatrolAgent> {
        self.agents.iter().find(|a| a.entity == entity)
    }

    pub fn get_mut(&mut self, entity: EntityId) -> Option<&mut PatrolAgent> {
        self.agents.iter_mut().find(|a| a.entity == entity)
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Drop every record and target.
    pub fn clear(&mut self) {
        self.agents.clear();
        self.targets.clear();
        self.built_under = None;
    }
}

fn build_agent<G: Geometry + ?Sized>(
    entity:   &EntitySnapshot,
    snapshot: &WorldSnapshot,
    zones:    &ZoneIndex,
    geometry: &G,
    config:   &PatrolConfig,
) -> PatrolAgent {
    let center = geometry.cell_center(entity.cell);
    let boundary: Option<Polygon> = zones
        .candidates_at(center)
        .into_iter()
        .map(|i| &snapshot.zones[i])
        .find(|zone| geometry.polygon_contains(zone, center))
        .cloned();

    let path = entity.flags.path_follower.then(|| {
        let named = snapshot
            .paths
            .iter()
            .filter(|p| entity.flags.path_name.as_deref() == Some(p.name.as_str()));
        let take = if entity.flags.multi_path { usize::MAX } else { 1 };
        PathAssignment::from_paths(named.take(take), geometry, entity.flags.start_node)
    });

    PatrolAgent::new(entity.id, entity.cell, entity.flags.clone(), config)
        .with_sight(entity.sight_range)
        .with_boundary(boundary)
        .with_path(path)
}
