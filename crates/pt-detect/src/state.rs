//! Per-agent detection record.

use pt_core::{Cell, EntityId, Point};

/// Where a patroller stands with respect to the players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DetectionState {
    #[default]
    Idle,
    /// A target has been seen; confirmation waits on the alert timeout.
    Alerted,
    /// Confirmed sighting.  Cleared on the following evaluation.
    Spotted,
}

/// A player-side entity, as seen at the start of the current tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Target {
    pub entity: EntityId,
    pub cell:   Cell,
    pub center: Point,
}

/// Detection state of one patroller.
///
/// `spotted` is a weak reference: it names an entity and is resolved against
/// the current targets every tick.  It is `Some` exactly when the state is
/// not `Idle`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Detection {
    state:          DetectionState,
    spotted:        Option<EntityId>,
    timed_out:      bool,
    pending_serial: Option<u64>,
}

impl Detection {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> DetectionState {
        self.state
    }

    #[inline]
    pub fn spotted(&self) -> Option<EntityId> {
        self.spotted
    }

    /// Alerted or Spotted.
    #[inline]
    pub fn is_alerting(&self) -> bool {
        self.state != DetectionState::Idle
    }

    /// The alert grace period has elapsed.
    #[inline]
    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// Serial of the alert timeout this record is waiting on.
    pub fn pending_serial(&self) -> Option<u64> {
        self.pending_serial
    }

    /// Remember which timer event ends the current alert.
    pub fn await_timeout(&mut self, serial: u64) {
        self.pending_serial = Some(serial);
        self.timed_out = false;
    }

    /// Apply a fired alert timeout.  Returns `false` (and changes nothing)
    /// when `serial` does not belong to the current alert.
    pub fn mark_timed_out(&mut self, serial: u64) -> bool {
        if self.state != DetectionState::Alerted || self.pending_serial != Some(serial) {
            return false;
        }
        self.pending_serial = None;
        self.timed_out = true;
        true
    }

    pub(crate) fn enter(&mut self, state: DetectionState, target: EntityId) {
        self.state = state;
        self.spotted = Some(target);
        self.timed_out = false;
        if state != DetectionState::Alerted {
            self.pending_serial = None;
        }
    }

    /// Back to Idle with no target.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
