//! `pt-movement`: where each patroller goes next.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`decision`] | `Decision`, `HoldReason`, `MoveContext`                    |
//! | [`strategy`] | `MovementStrategy` trait                                   |
//! | [`explore`]  | `RandomExplore`: unvisited neighbours, greedy when alerted |
//! | [`follow`]   | `PathFollower`: one path node per tick                     |
//! | [`chase`]    | `ChaseReturn`: pursue, then retrace the chase              |
//! | [`planner`]  | `MovementPlanner`: picks the strategy for an agent         |
//!
//! # Movement model
//!
//! A strategy answers one question per agent per tick: move to which cell, or
//! hold and why.  It may update the agent's movement memory (visited cells,
//! stall counter, path cursor, return stack) but never its `position`; the
//! scheduler commits positions after the whole pass.  Strategies read the
//! occupancy ledger as it stands when the agent's turn comes, so agents
//! decided earlier in the pass have already claimed their destinations.

pub mod chase;
pub mod decision;
pub mod explore;
pub mod follow;
pub mod planner;
pub mod strategy;


pub use chase::ChaseReturn;
pub use decision::{Decision, HoldReason, MoveContext};
pub use explore::RandomExplore;
pub use follow::PathFollower;
pub use planner::MovementPlanner;
pub use strategy::MovementStrategy;
