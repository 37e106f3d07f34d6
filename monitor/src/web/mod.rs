// File: monitor/src/web/mod.rs
pub mod handlers;
pub mod server;

pub use server::{create_router, start_web_server};

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

use crate::config::Config;
use crate::health::{ConnectionState, MonitorSnapshot, TickOutcome};

// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub snapshots: watch::Receiver<Arc<MonitorSnapshot>>,
}

impl AppState {
    pub fn new(config: Arc<Config>, snapshots: watch::Receiver<Arc<MonitorSnapshot>>) -> Self {
        Self { config, snapshots }
    }

    /// Latest published snapshot; never waits on the monitoring loop
    pub fn latest(&self) -> Arc<MonitorSnapshot> {
        self.snapshots.borrow().clone()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DelegateStatusSummary {
    pub host: String,
    pub status: String, // "Online", "Offline", "Unknown"
    pub connection_state: ConnectionState,
    pub producing: bool,
    pub missed_count: u32,
    pub current_interval_seconds: f64,
    pub tick_count: u64,
    pub last_outcome: Option<TickOutcome>,
    pub last_error: Option<String>,
    pub samples: usize,
    pub updated_at: String,
}
