//! `pt-sim`: the tick scheduler that drives the patrol engine.
//!
//! # Frame loop
//!
//! ```text
//! every host frame:
//!   ① Clock   : advance one frame; fire due timers
//!                  ArmPatrol            → armed = true
//!                  AlertTimeout{e, s}   → mark e's alert timed out (if s current)
//!   ② Gate    : compute only if armed, started, host not paused, no combat
//!   ③ Compute : disarm; schedule next ArmPatrol; refresh roster; seed ledger
//!                for each agent in roster order:
//!                  skip if gone or under direct control
//!                  detect (may request an alert timeout)
//!                  hold while watching, unless closing in on a distant target
//!                  plan: Move → stage update, claim new cell, release old
//!   ④ Commit  : one PatrolHost::apply_updates call; positions written back
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pt_core::PatrolConfig;
//! use pt_sim::{MemoryHost, NoopObserver, PatrolEngineBuilder};
//! use pt_spatial::GridGeometry;
//!
//! let mut engine = PatrolEngineBuilder::new(PatrolConfig::default(), GridGeometry::new(100))
//!     .build()?;
//! let mut host = MemoryHost::new(world);
//! engine.start(&mut host);
//! let reports = engine.run_frames(600, &mut host, &mut NoopObserver);
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod host;
pub mod observer;
pub mod report;


pub use builder::PatrolEngineBuilder;
pub use engine::PatrolEngine;
pub use error::{SimError, SimResult};
pub use host::{MemoryHost, PatrolHost, PositionUpdate};
pub use observer::{NoopObserver, PatrolObserver};
pub use report::TickReport;
