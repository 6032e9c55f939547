//! Fluent builder for constructing a [`PatrolEngine`].

use pt_agent::Roster;
use pt_core::{PatrolConfig, SimClock};
use pt_detect::{AlertSink, AllowAll, NoopSink, TransitionGate};
use pt_movement::MovementPlanner;
use pt_schedule::TimerQueue;
use pt_spatial::{Geometry, OccupancyLedger};

use crate::{PatrolEngine, SimResult};

/// Fluent builder for [`PatrolEngine<G, V, S>`].
///
/// # Required inputs
///
/// - [`PatrolConfig`]: delays, seed, movement options
/// - `G: Geometry`: the host's geometry adapter
///
/// # Optional inputs (have defaults)
///
/// | Method      | Default                            |
/// |-------------|------------------------------------|
/// | `.gate(v)`  | [`AllowAll`], nothing is vetoed    |
/// | `.sink(s)`  | [`NoopSink`], no notifications     |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = PatrolEngineBuilder::new(config, GridGeometry::new(100))
///     .sink(|event, spotter, target| println!("{event:?}: {spotter} → {target}"))
///     .build()?;
/// ```
pub struct PatrolEngineBuilder<G, V = AllowAll, S = NoopSink> {
    config:   PatrolConfig,
    geometry: G,
    gate:     V,
    sink:     S,
}

impl<G: Geometry> PatrolEngineBuilder<G> {
    /// Create a builder with the required inputs and default hooks.
    pub fn new(config: PatrolConfig, geometry: G) -> Self {
        Self { config, geometry, gate: AllowAll, sink: NoopSink }
    }
}

impl<G, V, S> PatrolEngineBuilder<G, V, S>
where
    G: Geometry,
    V: TransitionGate,
    S: AlertSink,
{
    /// Replace the veto hook.
    pub fn gate<V2: TransitionGate>(self, gate: V2) -> PatrolEngineBuilder<G, V2, S> {
        PatrolEngineBuilder { config: self.config, geometry: self.geometry, gate, sink: self.sink }
    }

    /// Replace the notification hook.
    pub fn sink<S2: AlertSink>(self, sink: S2) -> PatrolEngineBuilder<G, V, S2> {
        PatrolEngineBuilder { config: self.config, geometry: self.geometry, gate: self.gate, sink }
    }

    /// Validate the configuration and return a stopped engine.
    pub fn build(self) -> SimResult<PatrolEngine<G, V, S>> {
        self.config.validate()?;
        Ok(PatrolEngine {
            clock:       SimClock::new(self.config.frame_ms),
            config:      self.config,
            geometry:    self.geometry,
            gate:        self.gate,
            sink:        self.sink,
            roster:      Roster::new(),
            ledger:      OccupancyLedger::new(),
            timers:      TimerQueue::new(),
            planner:     MovementPlanner::new(),
            armed:       false,
            started:     false,
            next_serial: 0,
        })
    }
}
