//! `pt-core`: foundational types for the `rust_patrol` engine.
//!
//! This crate is a dependency of every other `pt-*` crate.  It has no `pt-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`ids`]    | `EntityId`                                        |
//! | [`geo`]    | `Cell` (grid-snapped position), `Point`           |
//! | [`time`]   | `Tick`, `SimClock`                                |
//! | [`rng`]    | `AgentRng` (per-agent, seeded from the entity id) |
//! | [`config`] | `PatrolConfig` and its validation                 |
//! | [`error`]  | `PtError`, `PtResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PatrolConfig;
pub use error::{PtError, PtResult};
pub use geo::{Cell, Point};
pub use ids::EntityId;
pub use rng::AgentRng;
pub use time::{SimClock, Tick};
