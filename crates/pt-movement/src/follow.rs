//! `PathFollower`: walk a drawn route node by node.

use pt_agent::PatrolAgent;
use pt_spatial::Geometry;
use tracing::warn;

use crate::{Decision, HoldReason, MoveContext, MovementStrategy};

/// Follows the agent's `PathAssignment`, one node per tick.  A claimed node
/// holds the agent without moving the cursor, so it retries the same node.
#[derive(Copy, Clone, Debug, Default)]
pub struct PathFollower;

impl MovementStrategy for PathFollower {
    fn select_destination<G: Geometry + ?Sized>(
        &self,
        agent: &mut PatrolAgent,
        ctx:   &MoveContext<'_, G>,
    ) -> Decision {
        let Some(path) = agent.path.as_mut().filter(|p| !p.is_empty()) else {
            warn!(entity = %agent.entity, path = ?agent.flags.path_name, "missing path assignment");
            return Decision::Hold(HoldReason::MissingPath);
        };

        path.ensure_cursor(&mut agent.rng, ctx.config.random_start_node, agent.position);
        if path.peek() == Some(agent.position) {
            path.advance();
        }
        let Some(next) = path.peek() else {
            return Decision::Hold(HoldReason::MissingPath);
        };

        if ctx.ledger.is_claimed(next) {
            return Decision::Hold(HoldReason::Blocked);
        }
        path.advance();
        Decision::Move(next)
    }
}
