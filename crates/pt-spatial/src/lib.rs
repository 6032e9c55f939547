//! `pt-spatial`: the spatial queries the patrol engine depends on.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`geometry`]   | `Geometry` trait (host adapter), `CollisionKind`         |
//! | [`grid`]       | `GridGeometry`: square-grid reference adapter with walls |
//! | [`polygon`]    | `Polygon`, `ZoneIndex` (R-tree over zone bounding boxes) |
//! | [`directions`] | Direction Enumerator: `candidates`, `Candidate`          |
//! | [`ledger`]     | `OccupancyLedger`: cells claimed during the current tick |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                              |
//! |-----------|-----------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the occupancy ledger. |
//! | `serde`   | Derives `Serialize`/`Deserialize` on public types.  |

pub mod directions;
pub mod geometry;
pub mod grid;
pub mod ledger;
pub mod polygon;

#[cfg(test)]
mod tests;

pub use directions::{Candidate, candidates};
pub use geometry::{CollisionKind, Geometry};
pub use grid::GridGeometry;
pub use ledger::OccupancyLedger;
pub use polygon::{Polygon, ZoneIndex};
