use std::fmt;
use std::time::Duration;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SimTime
// ---------------------------------------------------------------------------

/// Integer-nanosecond simulation clock.
///
/// Tracks elapsed simulated time as a monotonically increasing `u64`
/// nanosecond count, avoiding floating-point accumulation drift. Advanced by
/// exactly one fixed timestep per physics step; there is deliberately no
/// wall-clock accumulator — the frame driver owns the cadence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
    Resource,
)]
pub struct SimTime {
    nanos: u64,
}

impl SimTime {
    /// Create a new `SimTime` at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { nanos: 0 }
    }

    /// Raw nanosecond count.
    #[must_use]
    pub const fn nanos(&self) -> u64 {
        self.nanos
    }

    /// Elapsed seconds as `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn secs_f64(&self) -> f64 {
        self.nanos as f64 / 1_000_000_000.0
    }

    /// Number of complete steps of `dt_secs` elapsed so far.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn step_count(&self, dt_secs: f64) -> u64 {
        let dt_nanos = (dt_secs * 1_000_000_000.0) as u64;
        if dt_nanos == 0 {
            return 0;
        }
        self.nanos / dt_nanos
    }

    /// Advance the clock by `delta_secs` seconds.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn advance_secs(&mut self, delta_secs: f64) {
        let delta_nanos = (delta_secs * 1_000_000_000.0) as u64;
        self.nanos = self.nanos.saturating_add(delta_nanos);
    }

    /// Convert to a standard [`Duration`].
    #[must_use]
    pub const fn to_duration(&self) -> Duration {
        Duration::from_nanos(self.nanos)
    }

    /// Reset the clock to zero.
    pub const fn reset(&mut self) {
        self.nanos = 0;
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.nanos / 1_000_000_000;
        let millis = (self.nanos % 1_000_000_000) / 1_000_000;
        write!(f, "{secs}.{millis:03}s")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
