//! The `MovementStrategy` trait.

use pt_agent::PatrolAgent;
use pt_spatial::Geometry;

use crate::{Decision, MoveContext};

/// One way of choosing a destination.
///
/// Implementations may update the agent's movement memory but must not write
/// `agent.position`.
pub trait MovementStrategy {
    fn select_destination<G: Geometry + ?Sized>(
        &self,
        agent: &mut PatrolAgent,
        ctx:   &MoveContext<'_, G>,
    ) -> Decision;
}
