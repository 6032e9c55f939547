//! `pt-schedule`: what happens later: deferred timers and patrol routes.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`timer`]  | `TimerQueue` (logical-clock deferred events), `TimerEvent`     |
//! | [`path`]   | `PatrolPath` (host drawing), `PathAssignment` (nodes + cursor) |
//! | [`loader`] | `load_paths_csv` / `load_paths_reader`                         |
//! | [`error`]  | `ScheduleError`                                                |

pub mod error;
pub mod loader;
pub mod path;
pub mod timer;

#[cfg(test)]
mod tests;

pub use error::ScheduleError;
pub use loader::{load_paths_csv, load_paths_reader};
pub use path::{PathAssignment, PatrolPath};
pub use timer::{TimerEvent, TimerQueue};
