//! Veto and notification hooks.
//!
//! A [`TransitionGate`] is consulted before entering Alerted and before
//! confirming Spotted; a refusal leaves the state unchanged and is not an
//! error.  An
//! [`AlertSink`] hears about transitions after they happen.  Both are
//! implemented for plain closures so tests and small hosts need no types.

use pt_core::EntityId;

/// A detection event as presented to hooks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatrolEvent {
    /// Idle → Alerted.
    Alerted,
    /// Idle → Spotted or Alerted → Spotted.
    Spotted,
    /// The spotted target left the world.  Notification only, never gated.
    Lost,
}

// ── TransitionGate ────────────────────────────────────────────────────────────

/// Veto hook.  Return `false` to keep the patroller in its current state.
pub trait TransitionGate {
    fn allow(&mut self, event: PatrolEvent, spotter: EntityId, target: EntityId) -> bool;
}

impl<F> TransitionGate for F
where
    F: FnMut(PatrolEvent, EntityId, EntityId) -> bool,
{
    fn allow(&mut self, event: PatrolEvent, spotter: EntityId, target: EntityId) -> bool {
        self(event, spotter, target)
    }
}

/// Never vetoes.
#[derive(Copy, Clone, Debug, Default)]
pub struct AllowAll;

impl TransitionGate for AllowAll {
    fn allow(&mut self, _event: PatrolEvent, _spotter: EntityId, _target: EntityId) -> bool {
        true
    }
}

// ── AlertSink ─────────────────────────────────────────────────────────────────

/// Notification hook.
pub trait AlertSink {
    fn notify(&mut self, event: PatrolEvent, spotter: EntityId, target: EntityId);
}

impl<F> AlertSink for F
where
    F: FnMut(PatrolEvent, EntityId, EntityId),
{
    fn notify(&mut self, event: PatrolEvent, spotter: EntityId, target: EntityId) {
        self(event, spotter, target)
    }
}

/// Discards every notification.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopSink;

impl AlertSink for NoopSink {
    fn notify(&mut self, _event: PatrolEvent, _spotter: EntityId, _target: EntityId) {}
}

/// Fans one notification out to any number of listeners, in registration
/// order.
#[derive(Default)]
pub struct AlertSinks {
    sinks: Vec<Box<dyn AlertSink>>,
}

impl AlertSinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sink: impl AlertSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    pub fn with(mut self, sink: impl AlertSink + 'static) -> Self {
        self.push(sink);
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl AlertSink for AlertSinks {
    fn notify(&mut self, event: PatrolEvent, spotter: EntityId, target: EntityId) {
        for sink in &mut self.sinks {
            sink.notify(event, spotter, target);
        }
    }
}

/// Two sinks notified one after the other.  Built with [`AlertSinkExt::and`].
#[derive(Clone, Debug, Default)]
pub struct Chain<A, B> {
    first:  A,
    second: B,
}

impl<A: AlertSink, B: AlertSink> AlertSink for Chain<A, B> {
    fn notify(&mut self, event: PatrolEvent, spotter: EntityId, target: EntityId) {
        self.first.notify(event, spotter, target);
        self.second.notify(event, spotter, target);
    }
}

/// Combinators for [`AlertSink`].
pub trait AlertSinkExt: AlertSink + Sized {
    /// Notify `self`, then `other`.
    fn and<B: AlertSink>(self, other: B) -> Chain<Self, B> {
        Chain { first: self, second: other }
    }
}

impl<S: AlertSink> AlertSinkExt for S {}
