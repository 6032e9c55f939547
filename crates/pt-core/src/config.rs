//! Engine-wide patrol configuration.
//!
//! Written by external admin tooling, read by the engine.  Per-agent flags
//! (patrol enabled, path name, …) live in `pt-agent::AgentFlags`.

use crate::{PtError, PtResult};

/// Accepted range for [`PatrolConfig::tick_delay_ms`].
pub const TICK_DELAY_RANGE_MS: std::ops::RangeInclusive<u32> = 500..=10_000;

/// Accepted range for [`PatrolConfig::alert_delay_ms`].
pub const ALERT_DELAY_RANGE_MS: std::ops::RangeInclusive<u32> = 0..=10_000;

/// Accepted range for [`PatrolConfig::stall_threshold`].
pub const STALL_THRESHOLD_RANGE: std::ops::RangeInclusive<u32> = 1..=5;

/// Top-level patrol configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PatrolConfig {
    /// Allow the four diagonal neighbours as movement candidates.
    pub diagonals: bool,

    /// Delay between two patrol ticks.  Default: 2500 ms.
    pub tick_delay_ms: u32,

    /// Grace period between first sighting (Alerted) and confirmation
    /// (Spotted).  0 confirms on first contact.  Default: 5000 ms.
    pub alert_delay_ms: u32,

    /// Path followers without a cursor start on a random node instead of
    /// their configured start node.
    pub random_start_node: bool,

    /// Global illumination: vision range is unlimited.
    pub global_light: bool,

    /// Resolution of the host clock, i.e. how many ms one frame represents.
    pub frame_ms: u32,

    /// Consecutive stalls on the same cell tolerated before the visited
    /// history is cleared.
    pub stall_threshold: u32,

    /// An Alerted patroller farther than this from its target keeps closing
    /// in; within it the sighting consumes the turn.  Grid-distance units.
    pub chase_radius: f32,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            diagonals:         false,
            tick_delay_ms:     2_500,
            alert_delay_ms:    5_000,
            random_start_node: false,
            global_light:      false,
            frame_ms:          100,
            stall_threshold:   3,
            chase_radius:      10.0,
            seed:              0,
        }
    }
}

impl PatrolConfig {
    /// Check every bounded setting.
    pub fn validate(&self) -> PtResult<()> {
        if !TICK_DELAY_RANGE_MS.contains(&self.tick_delay_ms) {
            return Err(PtError::Config(format!(
                "tick_delay_ms {} outside {:?}",
                self.tick_delay_ms, TICK_DELAY_RANGE_MS
            )));
        }
        if !ALERT_DELAY_RANGE_MS.contains(&self.alert_delay_ms) {
            return Err(PtError::Config(format!(
                "alert_delay_ms {} outside {:?}",
                self.alert_delay_ms, ALERT_DELAY_RANGE_MS
            )));
        }
        if !STALL_THRESHOLD_RANGE.contains(&self.stall_threshold) {
            return Err(PtError::Config(format!(
                "stall_threshold {} outside {:?}",
                self.stall_threshold, STALL_THRESHOLD_RANGE
            )));
        }
        if self.frame_ms == 0 {
            return Err(PtError::Config("frame_ms must be positive".into()));
        }
        if !(self.chase_radius.is_finite() && self.chase_radius >= 0.0) {
            return Err(PtError::Config(format!(
                "chase_radius {} must be a finite, non-negative distance",
                self.chase_radius
            )));
        }
        Ok(())
    }

    /// `true` when a sighting is confirmed immediately.
    #[inline]
    pub fn instant_confirmation(&self) -> bool {
        self.alert_delay_ms == 0
    }
}
