//! `ChaseReturn`: pursue an alert, then walk the chase back.
//!
//! Every pursuit step pushes the cell the agent left onto its return stack.
//! Once the alert is over the stack is popped one cell per tick, so a chase
//! of N steps is undone by exactly N return steps and the agent ends up where
//! the chase began.

use pt_agent::PatrolAgent;
use pt_detect::DetectionState;
use pt_spatial::Geometry;
use tracing::warn;

use crate::{Decision, HoldReason, MoveContext, MovementStrategy, RandomExplore};

#[derive(Copy, Clone, Debug, Default)]
pub struct ChaseReturn;

impl ChaseReturn {
    /// One greedy step toward the spotted target.
    pub fn pursue<G: Geometry + ?Sized>(
        &self,
        agent: &mut PatrolAgent,
        ctx:   &MoveContext<'_, G>,
    ) -> Decision {
        let from = agent.position;
        let decision = RandomExplore.select_destination(agent, ctx);
        if let Decision::Move(_) = decision {
            agent.return_stack.push(from);
        }
        decision
    }

    /// One step back along the return stack.  A taken cell holds the agent;
    /// after `stall_threshold` blocked attempts in a row the rest of the
    /// stack is dropped.
    pub fn retrace<G: Geometry + ?Sized>(
        &self,
        agent: &mut PatrolAgent,
        ctx:   &MoveContext<'_, G>,
    ) -> Decision {
        let Some(&back) = agent.return_stack.last() else {
            return Decision::Hold(HoldReason::Stalled);
        };
        if ctx.ledger.is_claimed(back) {
            let count = agent.stall.bump(agent.position);
            if count >= ctx.config.stall_threshold {
                warn!(
                    entity = %agent.entity,
                    remaining = agent.return_stack.len(),
                    "return path blocked, abandoning it"
                );
                agent.return_stack.clear();
                agent.stall.reset();
            }
            return Decision::Hold(HoldReason::Blocked);
        }
        agent.return_stack.pop();
        Decision::Move(back)
    }
}

impl MovementStrategy for ChaseReturn {
    fn select_destination<G: Geometry + ?Sized>(
        &self,
        agent: &mut PatrolAgent,
        ctx:   &MoveContext<'_, G>,
    ) -> Decision {
        if agent.detection.state() == DetectionState::Alerted {
            self.pursue(agent, ctx)
        } else {
            self.retrace(agent, ctx)
        }
    }
}
