//! Health monitoring module
//!
//! Trackers that turn raw per-tick observations of the delegate node into
//! confirmed state changes, and the loop that drives them.

mod connections;
mod debounce;
pub mod monitor;
mod production;
pub mod types;

pub use connections::ConnectionHealthTracker;
pub use debounce::{ConfirmedTransition, DebouncedStateTracker};
pub use monitor::{is_local_host, MonitorLoop};
pub use production::{ProductionEvent, ProductionState, ProductionTracker};
pub use types::{
    ConnectionEvent, ConnectionState, MonitorSnapshot, NodeInfo, NodeState, Streak, TickOutcome,
};
