//! `Detector`: one detection evaluation for one patroller.
//!
//! # Transition table
//!
//! | State   | Target seen | Timeout elapsed | Result                                  |
//! |---------|-------------|-----------------|-----------------------------------------|
//! | Idle    | yes         | –               | Spotted (delay 0) or Alerted, gated     |
//! | Idle    | no          | –               | unchanged                               |
//! | Alerted | yes         | no              | unchanged                               |
//! | Alerted | yes         | yes             | Spotted, gated                          |
//! | Alerted | no          | no              | unchanged                               |
//! | Alerted | no          | yes             | Idle (lapse, never vetoed)              |
//! | Spotted | either      | –               | Idle, silent                            |
//!
//! Spotted lasts one evaluation: the confirmation was already approved and
//! announced, so the next evaluation clears it without consulting the gate,
//! whether or not the target is still in sight.  A fresh sighting starts
//! over from Idle on a later evaluation.
//!
//! Before the table is consulted, a spotted target that no longer exists
//! drops the record to Idle unconditionally and notifies `Lost`.

use pt_core::{EntityId, PatrolConfig, Point};
use pt_spatial::{CollisionKind, Geometry};
use tracing::debug;

use crate::{AlertSink, Detection, DetectionState, PatrolEvent, Target, TransitionGate};

/// The patroller doing the looking.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewer {
    pub entity:      EntityId,
    pub center:      Point,
    /// Vision range in grid-distance units.  Ignored under global light.
    pub sight_range: f32,
}

/// One state change made during an evaluation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub entity: EntityId,
    pub from:   DetectionState,
    pub to:     DetectionState,
    pub target: EntityId,
}

/// Outcome of [`Detector::observe`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Observation {
    /// Some target was visible this tick, whether or not the state changed.
    pub observed:        bool,
    /// State changes in the order they happened (at most two: an implicit
    /// drop for a vanished target, then a fresh sighting).
    pub transitions:     Vec<Transition>,
    /// The agent entered Alerted and needs an alert timeout scheduled.
    pub request_timeout: bool,
}

/// Evaluates detection against the current targets.
pub struct Detector<'a, G: ?Sized, V, S> {
    geometry: &'a G,
    config:   &'a PatrolConfig,
    gate:     &'a mut V,
    sink:     &'a mut S,
}

impl<'a, G, V, S> Detector<'a, G, V, S>
where
    G: Geometry + ?Sized,
    V: TransitionGate,
    S: AlertSink,
{
    pub fn new(geometry: &'a G, config: &'a PatrolConfig, gate: &'a mut V, sink: &'a mut S) -> Self {
        Self { geometry, config, gate, sink }
    }

    /// `true` if `viewer` can see `target` this tick.
    pub fn can_see(&self, viewer: &Viewer, target: &Target) -> bool {
        let range = if self.config.global_light { f32::INFINITY } else { viewer.sight_range };
        self.geometry.distance(viewer.center, target.center) <= range
            && !self.geometry.collides(viewer.center, target.center, CollisionKind::Sight)
    }

    /// First visible target other than the viewer itself, trying the
    /// currently spotted one before the rest in snapshot order.
    fn find_visible<'t>(
        &self,
        viewer:  &Viewer,
        current: Option<EntityId>,
        targets: &'t [Target],
    ) -> Option<&'t Target> {
        let preferred = current.and_then(|id| targets.iter().find(|t| t.entity == id));
        preferred
            .into_iter()
            .chain(targets.iter().filter(|t| Some(t.entity) != current))
            .filter(|t| t.entity != viewer.entity)
            .find(|t| self.can_see(viewer, t))
    }

    /// Run one evaluation, mutating `detection` in place.
    pub fn observe(
        &mut self,
        viewer:    &Viewer,
        detection: &mut Detection,
        targets:   &[Target],
    ) -> Observation {
        let mut out = Observation::default();

        if let Some(id) = detection.spotted() {
            if !targets.iter().any(|t| t.entity == id) {
                let from = detection.state();
                detection.reset();
                self.sink.notify(PatrolEvent::Lost, viewer.entity, id);
                self.record(&mut out, viewer.entity, from, DetectionState::Idle, id);
            }
        }

        let seen = self.find_visible(viewer, detection.spotted(), targets);
        out.observed = seen.is_some();

        match (detection.state(), seen) {
            (DetectionState::Idle, Some(t)) => {
                if self.config.instant_confirmation() {
                    self.gated(&mut out, viewer.entity, detection, DetectionState::Spotted, t.entity);
                } else if self.gated(&mut out, viewer.entity, detection, DetectionState::Alerted, t.entity) {
                    out.request_timeout = true;
                }
            }
            (DetectionState::Alerted, Some(t)) if detection.timed_out() => {
                self.gated(&mut out, viewer.entity, detection, DetectionState::Spotted, t.entity);
            }
            (DetectionState::Alerted, None) if detection.timed_out() => {
                if let Some(id) = detection.spotted() {
                    detection.reset();
                    self.record(&mut out, viewer.entity, DetectionState::Alerted, DetectionState::Idle, id);
                }
            }
            (DetectionState::Spotted, _) => {
                if let Some(id) = detection.spotted() {
                    detection.reset();
                    self.record(&mut out, viewer.entity, DetectionState::Spotted, DetectionState::Idle, id);
                }
            }
            _ => {}
        }

        out
    }

    /// Consult the gate, enter `to` (Alerted or Spotted), notify.  Returns
    /// whether the transition happened.
    fn gated(
        &mut self,
        out:       &mut Observation,
        spotter:   EntityId,
        detection: &mut Detection,
        to:        DetectionState,
        target:    EntityId,
    ) -> bool {
        let event = match to {
            DetectionState::Alerted => PatrolEvent::Alerted,
            _ => PatrolEvent::Spotted,
        };
        if !self.gate.allow(event, spotter, target) {
            return false;
        }
        let from = detection.state();
        detection.enter(to, target);
        self.sink.notify(event, spotter, target);
        self.record(out, spotter, from, to, target);
        true
    }

    fn record(
        &self,
        out:    &mut Observation,
        entity: EntityId,
        from:   DetectionState,
        to:     DetectionState,
        target: EntityId,
    ) {
        debug!(%entity, ?from, ?to, %target, "detection transition");
        out.transitions.push(Transition { entity, from, to, target });
    }
}
