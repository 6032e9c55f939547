//! Logical time model.
//!
//! # Design
//!
//! The host calls the engine once per clock frame.  Every frame advances a
//! monotonically increasing [`Tick`] counter; the mapping to real time lives in
//! [`SimClock`]:
//!
//!   elapsed_ms = tick * frame_ms
//!
//! Deferred callbacks (the arming delay and the alert timeout) are expressed
//! as "fire at tick N" and never sleep.  Using an integer tick keeps every
//! delay comparison exact and makes runs reproducible frame for frame.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between frame counts and milliseconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many real milliseconds one frame represents.
    pub frame_ms: u32,
    /// The current tick, advanced by `SimClock::advance()` each frame.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock at tick 0 with the given resolution.  A resolution of
    /// zero is treated as one millisecond.
    pub fn new(frame_ms: u32) -> Self {
        Self {
            frame_ms: frame_ms.max(1),
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one frame.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed milliseconds since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.current_tick.0 * self.frame_ms as u64
    }

    /// How many frames span `ms` milliseconds? (rounds up: a delay never
    /// fires early)
    #[inline]
    pub fn ticks_for_ms(&self, ms: u64) -> u64 {
        ms.div_ceil(self.frame_ms as u64)
    }

    /// The tick at which a delay of `ms` started now expires.
    #[inline]
    pub fn deadline(&self, ms: u64) -> Tick {
        self.current_tick + self.ticks_for_ms(ms)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} ms)", self.current_tick, self.elapsed_ms())
    }
}
