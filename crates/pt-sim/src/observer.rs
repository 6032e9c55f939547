//! Engine observer trait for progress reporting and data collection.

use pt_core::{EntityId, Tick};
use pt_movement::HoldReason;

use crate::TickReport;

/// Callbacks invoked by [`PatrolEngine::frame`][crate::PatrolEngine::frame].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait PatrolObserver {
    /// Called every frame after timers fire, whether or not a tick runs.
    fn on_frame(&mut self, _tick: Tick) {}

    /// Called when an agent stays put for a movement reason.
    fn on_hold(&mut self, _entity: EntityId, _reason: HoldReason) {}

    /// Called after each completed patrol tick.
    fn on_tick(&mut self, _report: &TickReport) {}
}

/// A [`PatrolObserver`] that does nothing.
pub struct NoopObserver;

impl PatrolObserver for NoopObserver {}
