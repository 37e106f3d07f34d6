use crate::constants::stats::HARD_CAP;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// One resource sample of the delegate node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsFrame {
    pub cpu: f64,
    pub mem: u64,
    pub connections: u64,
    pub timestamp: DateTime<Utc>,
}

impl StatsFrame {
    pub fn new(cpu: f64, mem: u64, connections: u64) -> Self {
        Self {
            cpu,
            mem,
            connections,
            timestamp: Utc::now(),
        }
    }

    /// Sample recorded while the node is offline
    pub fn zero() -> Self {
        Self::new(0.0, 0, 0)
    }
}

/// Number of samples needed to cover `time_span` at one sample per `interval`.
pub fn desired_capacity(time_span: Duration, interval: Duration) -> usize {
    if interval.is_zero() {
        return 0;
    }
    (time_span.as_secs_f64() / interval.as_secs_f64()).floor() as usize
}

/// Insertion-ordered buffer that drops its oldest frame on overflow.
#[derive(Debug, Clone)]
pub struct StatsRing {
    frames: VecDeque<StatsFrame>,
    capacity: usize,
}

impl StatsRing {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frames: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Ring sized for a history window, never larger than [`HARD_CAP`].
    pub fn for_window(time_span: Duration, interval: Duration) -> Self {
        Self::with_capacity(desired_capacity(time_span, interval).min(HARD_CAP))
    }

    pub fn append(&mut self, frame: StatsFrame) {
        if self.capacity == 0 {
            return;
        }
        if self.frames.len() == self.capacity {
            self.frames.pop_front();
        }
        self.frames.push_back(frame);
    }

    /// Copy of the retained frames, oldest first.
    pub fn snapshot(&self) -> Vec<StatsFrame> {
        self.frames.iter().cloned().collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.frames.len() == self.capacity
    }

    pub fn latest(&self) -> Option<&StatsFrame> {
        self.frames.back()
    }
}
