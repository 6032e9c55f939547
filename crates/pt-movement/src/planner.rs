//! `MovementPlanner`: strategy dispatch.

use pt_agent::PatrolAgent;
use pt_detect::DetectionState;
use pt_spatial::Geometry;

use crate::{ChaseReturn, Decision, MoveContext, MovementStrategy, PathFollower, RandomExplore};

/// Picks a strategy per agent, first match wins:
///
/// 1. Alerted → pursuit ([`ChaseReturn`]);
/// 2. non-empty return stack → retrace ([`ChaseReturn`]);
/// 3. path follower → [`PathFollower`];
/// 4. otherwise → [`RandomExplore`].
///
/// A move resets the agent's stall counter.
#[derive(Copy, Clone, Debug, Default)]
pub struct MovementPlanner {
    explore: RandomExplore,
    follow:  PathFollower,
    chase:   ChaseReturn,
}

impl MovementPlanner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MovementStrategy for MovementPlanner {
    fn select_destination<G: Geometry + ?Sized>(
        &self,
        agent: &mut PatrolAgent,
        ctx:   &MoveContext<'_, G>,
    ) -> Decision {
        let decision = if agent.detection.state() == DetectionState::Alerted {
            self.chase.pursue(agent, ctx)
        } else if !agent.return_stack.is_empty() {
            self.chase.retrace(agent, ctx)
        } else if agent.flags.path_follower {
            self.follow.select_destination(agent, ctx)
        } else {
            self.explore.select_destination(agent, ctx)
        };
        if let Decision::Move(_) = decision {
            agent.stall.reset();
        }
        decision
    }
}
