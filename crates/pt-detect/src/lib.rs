//! `pt-detect`: does a patroller see a player, and what does it do about it.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`state`]    | `DetectionState`, `Detection` (per-agent record), `Target`   |
//! | [`hooks`]    | `PatrolEvent`, `TransitionGate`, `AlertSink` and stock impls |
//! | [`detector`] | `Detector`: evaluates one agent per tick, `Observation`      |
//!
//! # Design notes
//!
//! Detection never schedules anything itself.  When an alert needs a grace
//! period the [`Observation`] says so and the engine turns it into a timer
//! event; when the timer fires the engine calls
//! [`Detection::mark_timed_out`] and the next evaluation reads that flag.
//! Timers therefore only flip flags, and every transition happens inside a
//! tick.

pub mod detector;
pub mod hooks;
pub mod state;


pub use detector::{Detector, Observation, Transition, Viewer};
pub use hooks::{
    AlertSink, AlertSinkExt, AlertSinks, AllowAll, Chain, NoopSink, PatrolEvent, TransitionGate,
};
pub use state::{Detection, DetectionState, Target};
