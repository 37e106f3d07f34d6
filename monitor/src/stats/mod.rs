//! Bounded resource statistics
//!
//! The monitoring loop appends one [`StatsFrame`] per tick to a [`StatsRing`]
//! whose capacity is derived from the configured history window, and asks the
//! [`SamplingScheduler`] how long to sleep before the next tick.

mod ring;
mod scheduler;

pub use ring::{desired_capacity, StatsFrame, StatsRing};
pub use scheduler::SamplingScheduler;
