//! `TimerQueue`: deferred events on the logical clock.
//!
//! The engine has two deferred elements: the arming delay between patrol
//! ticks and the per-agent alert timeout.  Neither runs movement or
//! detection when it fires; each only flips a flag that the next tick
//! reads.  The engine drains due events at the start of a frame, applies the
//! flag changes, and only then decides whether to compute.
//!
//! Events that outlive the state they refer to (an alert timeout for an
//! agent that has since been dropped, an arming event after `stop`) fire
//! harmlessly: the receiver checks before acting.

use std::collections::BTreeMap;

use pt_core::{EntityId, Tick};

/// A deferred flag change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Arm the scheduler for its next patrol tick.
    ArmPatrol,

    /// The alert grace period of `entity` has elapsed.  `serial` identifies
    /// the alert that requested it; stale serials are ignored.
    AlertTimeout { entity: EntityId, serial: u64 },
}

/// A priority queue mapping ticks → events due at that tick.
#[derive(Debug)]
pub struct TimerQueue<E = TimerEvent> {
    inner: BTreeMap<Tick, Vec<E>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self { inner: BTreeMap::new(), total: 0 }
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` to fire at `tick`.
    pub fn push(&mut self, tick: Tick, event: E) {
        self.inner.entry(tick).or_default().push(event);
        self.total += 1;
    }

    /// Remove and return every event due at or before `now`, earliest first;
    /// events sharing a tick keep insertion order.
    pub fn drain_due(&mut self, now: Tick) -> Vec<E> {
        let later = self.inner.split_off(&now.offset(1));
        let due = std::mem::replace(&mut self.inner, later);
        let events: Vec<E> = due.into_values().flatten().collect();
        self.total -= events.len();
        events
    }

    /// The earliest tick with at least one queued event, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total number of queued events.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn clear(&mut self) {
        self.inner.clear();
        self.total = 0;
    }
}
