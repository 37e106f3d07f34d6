use super::ring::{desired_capacity, StatsRing};
use crate::constants::stats::HARD_CAP;
use std::time::Duration;
use tracing::debug;

/// Chooses the sleep between ticks.
///
/// Polls at `growing_interval` until the stats ring is full for the first
/// time, then switches for good to `stable_interval`, which is stretched when
/// the configured time span needs more samples than [`HARD_CAP`] allows.
#[derive(Debug, Clone)]
pub struct SamplingScheduler {
    growing_interval: Duration,
    stable_interval: Duration,
    current_interval: Duration,
    stable: bool,
}

impl SamplingScheduler {
    pub fn new(time_span: Duration, growing_interval: Duration) -> Self {
        let desired = desired_capacity(time_span, growing_interval);

        let stable_interval = if desired > HARD_CAP {
            growing_interval.mul_f64(desired as f64 / HARD_CAP as f64)
        } else {
            growing_interval
        };

        Self {
            growing_interval,
            stable_interval,
            current_interval: growing_interval,
            stable: false,
        }
    }

    /// Interval to sleep before the next tick.
    pub fn next_interval(&mut self, ring: &StatsRing) -> Duration {
        if !self.stable && ring.is_full() {
            debug!(
                "Switching stats plot to new time interval: {:?} instead of {:?} during initial fill up",
                self.stable_interval, self.growing_interval
            );
            self.current_interval = self.stable_interval;
            self.stable = true;
        }
        self.current_interval
    }

    pub fn current_interval(&self) -> Duration {
        self.current_interval
    }

    pub fn growing_interval(&self) -> Duration {
        self.growing_interval
    }

    pub fn stable_interval(&self) -> Duration {
        self.stable_interval
    }

    pub fn is_stable(&self) -> bool {
        self.stable
    }
}
