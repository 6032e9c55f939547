//! `pt-agent`: who patrols, who gets watched, and what each patroller
//! remembers.
//!
//! # Crate layout
//!
//! | Module       | Contents                                        |
//! |--------------|-------------------------------------------------|
//! | [`flags`]    | `AgentFlags`: per-entity patrol configuration   |
//! | [`snapshot`] | `WorldSnapshot`, `EntitySnapshot`, `EntityKind` |
//! | [`agent`]    | `PatrolAgent`, `VisitedCells`, `StallCounter`   |
//! | [`roster`]   | `Roster` (Agent Registry), `RosterUpdate`       |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                    |
//! |-----------|-----------------------------------------------------------|
//! | `fx-hash` | FxHash for visited sets and the occupancy ledger.         |
//! | `serde`   | Derives `Serialize`/`Deserialize` on flags and snapshots. |

pub mod agent;
pub mod flags;
pub mod roster;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use agent::{PatrolAgent, StallCounter, VisitedCells};
pub use flags::AgentFlags;
pub use roster::{Roster, RosterUpdate};
pub use snapshot::{EntityKind, EntitySnapshot, WorldSnapshot};
