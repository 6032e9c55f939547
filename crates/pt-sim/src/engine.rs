//! The `PatrolEngine` struct and its frame loop.

use pt_agent::{PatrolAgent, Roster};
use pt_core::{EntityId, PatrolConfig, SimClock, Tick};
use pt_detect::{AlertSink, DetectionState, Detector, Target, TransitionGate, Viewer};
use pt_movement::{Decision, MoveContext, MovementPlanner, MovementStrategy};
use pt_schedule::{TimerEvent, TimerQueue};
use pt_spatial::{Geometry, OccupancyLedger};
use tracing::{debug, info};

use crate::{PatrolHost, PatrolObserver, PositionUpdate, TickReport};

/// The patrol scheduler.
///
/// Holds all engine state and drives one patrol tick whenever the arming
/// delay has elapsed.  `G` is the host's geometry adapter, `V` the veto hook
/// and `S` the notification hook.
///
/// Create via [`PatrolEngineBuilder`][crate::PatrolEngineBuilder].
pub struct PatrolEngine<G, V, S> {
    pub config: PatrolConfig,

    /// Logical clock, one tick per host frame.
    pub clock: SimClock,

    pub(crate) geometry: G,
    pub(crate) gate:     V,
    pub(crate) sink:     S,

    pub(crate) roster:  Roster,
    pub(crate) ledger:  OccupancyLedger,
    pub(crate) timers:  TimerQueue,
    pub(crate) planner: MovementPlanner,

    pub(crate) armed:       bool,
    pub(crate) started:     bool,
    /// Serial handed to the next alert timeout.
    pub(crate) next_serial: u64,
}

impl<G, V, S> PatrolEngine<G, V, S>
where
    G: Geometry,
    V: TransitionGate,
    S: AlertSink,
{
    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Start patrolling: rebuild the roster now and arm the first tick after
    /// `tick_delay_ms`.
    pub fn start<H: PatrolHost>(&mut self, host: &mut H) {
        self.started = true;
        self.armed = false;
        self.schedule_arming();
        let update = self.roster.refresh(host.snapshot(), &self.geometry, &self.config);
        info!(tick = %self.clock.current_tick, ?update, "patrol started");
    }

    /// Stop patrolling.  Outstanding timers still fire but change nothing.
    pub fn stop(&mut self) {
        self.started = false;
        self.armed = false;
        info!(tick = %self.clock.current_tick, "patrol stopped");
    }

    // ── Frame loop ────────────────────────────────────────────────────────

    /// Advance one host frame.  Returns the report of the patrol tick run
    /// during this frame, if any.
    pub fn frame<H, O>(&mut self, host: &mut H, observer: &mut O) -> Option<TickReport>
    where
        H: PatrolHost,
        O: PatrolObserver,
    {
        self.clock.advance();
        let now = self.clock.current_tick;
        for event in self.timers.drain_due(now) {
            self.fire(event);
        }
        observer.on_frame(now);

        if !(self.armed && self.started) || host.is_paused() || host.combat_active() {
            return None;
        }
        let report = self.compute(host, observer);
        observer.on_tick(&report);
        Some(report)
    }

    /// Run `n` frames, collecting the reports of every tick that ran.
    pub fn run_frames<H, O>(&mut self, n: u64, host: &mut H, observer: &mut O) -> Vec<TickReport>
    where
        H: PatrolHost,
        O: PatrolObserver,
    {
        (0..n).filter_map(|_| self.frame(host, observer)).collect()
    }

    /// One patrol tick, unconditionally.  [`frame`](Self::frame) calls this
    /// when the engine is armed.
    pub fn compute<H, O>(&mut self, host: &mut H, observer: &mut O) -> TickReport
    where
        H: PatrolHost,
        O: PatrolObserver,
    {
        self.armed = false;
        self.schedule_arming();

        let now = self.clock.current_tick;
        let snapshot = host.snapshot();
        let roster_update = self.roster.refresh(snapshot, &self.geometry, &self.config);
        self.roster.seed_ledger(&mut self.ledger);

        let mut report = TickReport::new(now, roster_update);
        {
            let (agents, targets) = self.roster.parts_mut();
            let mut detector =
                Detector::new(&self.geometry, &self.config, &mut self.gate, &mut self.sink);

            for agent in agents.iter_mut() {
                let Some(entity) = snapshot.get(agent.entity) else {
                    debug!(entity = %agent.entity, "patroller gone from scene, skipping");
                    report.skipped.push(agent.entity);
                    continue;
                };
                if entity.controlled {
                    report.skipped.push(agent.entity);
                    continue;
                }

                if agent.can_spot {
                    let viewer = Viewer {
                        entity:      agent.entity,
                        center:      self.geometry.cell_center(agent.position),
                        sight_range: agent.sight_range,
                    };
                    let obs = detector.observe(&viewer, &mut agent.detection, targets);
                    if obs.request_timeout {
                        let serial = self.next_serial;
                        self.next_serial += 1;
                        agent.detection.await_timeout(serial);
                        self.timers.push(
                            self.clock.deadline(self.config.alert_delay_ms as u64),
                            TimerEvent::AlertTimeout { entity: agent.entity, serial },
                        );
                    }
                    report.transitions.extend(obs.transitions);
                    if obs.observed && !closing_in(agent, targets, &self.geometry, &self.config) {
                        report.watching.push(agent.entity);
                        continue;
                    }
                }

                let ctx = MoveContext::new(&self.geometry, &self.ledger, &self.config, targets);
                match self.planner.select_destination(agent, &ctx) {
                    Decision::Move(cell) => {
                        report.updates.push(PositionUpdate { entity: agent.entity, cell });
                        self.ledger.transfer(agent.position, cell);
                    }
                    Decision::Hold(reason) => {
                        debug!(entity = %agent.entity, ?reason, "patroller holds");
                        report.holds.push((agent.entity, reason));
                        observer.on_hold(agent.entity, reason);
                    }
                }
            }
        }

        self.commit(host, &report.updates);
        report
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn agent(&self, entity: EntityId) -> Option<&PatrolAgent> {
        self.roster.get(entity)
    }

    pub fn ledger(&self) -> &OccupancyLedger {
        &self.ledger
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn now(&self) -> Tick {
        self.clock.current_tick
    }

    /// Number of timer events not yet fired.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn schedule_arming(&mut self) {
        let at = self.clock.deadline(self.config.tick_delay_ms as u64);
        self.timers.push(at, TimerEvent::ArmPatrol);
    }

    fn fire(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::ArmPatrol => {
                if self.started {
                    self.armed = true;
                }
            }
            TimerEvent::AlertTimeout { entity, serial } => {
                let applied = self
                    .roster
                    .get_mut(entity)
                    .is_some_and(|a| a.detection.mark_timed_out(serial));
                if !applied {
                    debug!(%entity, serial, "stale alert timeout ignored");
                }
            }
        }
    }

    /// Hand the staged moves to the host and make them authoritative.
    fn commit<H: PatrolHost>(&mut self, host: &mut H, updates: &[PositionUpdate]) {
        if updates.is_empty() {
            return;
        }
        host.apply_updates(updates);
        for u in updates {
            if let Some(agent) = self.roster.get_mut(u.entity) {
                agent.position = u.cell;
                agent.visited.insert(u.cell);
            }
        }
    }
}

/// An Alerted agent at least `chase_radius` from its target keeps moving
/// toward it even while it can see it.
fn closing_in<G: Geometry>(
    agent:    &PatrolAgent,
    targets:  &[Target],
    geometry: &G,
    config:   &PatrolConfig,
) -> bool {
    if agent.detection.state() != DetectionState::Alerted {
        return false;
    }
    agent
        .detection
        .spotted()
        .and_then(|id| targets.iter().find(|t| t.entity == id))
        .is_some_and(|t| {
            geometry.distance(geometry.cell_center(agent.position), t.center) >= config.chase_radius
        })
}
