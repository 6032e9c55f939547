//! `RandomExplore`: wander to unvisited neighbours; close in when alerted.

use pt_agent::PatrolAgent;
use pt_core::Point;
use pt_detect::DetectionState;
use pt_spatial::{Candidate, CollisionKind, Geometry, candidates};
use tracing::{debug, warn};

use crate::{Decision, HoldReason, MoveContext, MovementStrategy};

/// Random exploration with a greedy pursuit branch.
#[derive(Copy, Clone, Debug, Default)]
pub struct RandomExplore;

impl RandomExplore {
    /// Neighbours the agent may step onto: not visited, not claimed, inside
    /// its boundary (if any), and reachable without crossing an obstacle.
    pub fn admissible<G: Geometry + ?Sized>(
        agent: &PatrolAgent,
        ctx:   &MoveContext<'_, G>,
    ) -> Vec<Candidate> {
        let origin = ctx.geometry.cell_center(agent.position);
        candidates(ctx.geometry, agent.position, ctx.config.diagonals)
            .into_iter()
            .filter(|c| !agent.visited.contains(c.cell))
            .filter(|c| !ctx.ledger.is_claimed(c.cell))
            .filter(|c| {
                agent
                    .boundary
                    .as_ref()
                    .is_none_or(|zone| ctx.geometry.polygon_contains(zone, c.center))
            })
            .filter(|c| !ctx.geometry.collides(origin, c.center, CollisionKind::Movement))
            .collect()
    }

    /// The candidate closest to `goal`; the first one wins ties.
    pub fn closest<G: Geometry + ?Sized>(
        geometry: &G,
        options:  &[Candidate],
        goal:     Point,
    ) -> Option<Candidate> {
        let mut best: Option<(Candidate, f32)> = None;
        for &c in options {
            let d = geometry.distance(c.center, goal);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((c, d));
            }
        }
        best.map(|(c, _)| c)
    }

    /// Hold in place, and clear the visited history once the agent has been
    /// stuck on the same cell more than `stall_threshold` times in a row.
    fn stall<G: Geometry + ?Sized>(agent: &mut PatrolAgent, ctx: &MoveContext<'_, G>) -> Decision {
        agent.visited.insert(agent.position);
        let count = agent.stall.bump(agent.position);
        warn!(entity = %agent.entity, cell = %agent.position, count, "patroller stalled");
        if count > ctx.config.stall_threshold {
            debug!(entity = %agent.entity, "stuck threshold crossed, clearing visited cells");
            agent.visited.reset_to(agent.position);
            agent.stall.reset();
        }
        Decision::Hold(HoldReason::Stalled)
    }
}

impl MovementStrategy for RandomExplore {
    fn select_destination<G: Geometry + ?Sized>(
        &self,
        agent: &mut PatrolAgent,
        ctx:   &MoveContext<'_, G>,
    ) -> Decision {
        let options = Self::admissible(agent, ctx);
        if options.is_empty() {
            return Self::stall(agent, ctx);
        }

        let goal = (agent.detection.state() == DetectionState::Alerted)
            .then(|| agent.detection.spotted().and_then(|id| ctx.target(id)))
            .flatten();

        let choice = match goal {
            Some(target) => Self::closest(ctx.geometry, &options, target.center),
            None => agent.rng.choose(&options).copied(),
        };
        match choice {
            Some(c) => Decision::Move(c.cell),
            None => Self::stall(agent, ctx),
        }
    }
}
