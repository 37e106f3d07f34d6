//! Health monitoring types and RPC response structures

use super::production::ProductionState;
use crate::stats::StatsFrame;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reachability of the delegate node as seen by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeState {
    Online,
    Offline,
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeState::Online => write!(f, "online"),
            NodeState::Offline => write!(f, "offline"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    #[default]
    Unknown,
    Connected,
    Starved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionEvent {
    Starved,
    Recovered,
}

/// Subset of the node's `get_info` answer the monitor cares about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub network_num_connections: u64,
    pub blockchain_head_block_age: u64,
}

/// Block production streak of the monitored delegate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub producing: bool,
    pub streak_length: u64,
}

/// How a tick ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickOutcome {
    Sampled,
    SkippedOffline,
    SkippedNotLocal,
}

/// Immutable view of the loop state, published after every tick
#[derive(Debug, Clone, Serialize)]
pub struct MonitorSnapshot {
    pub host: String,
    pub online: Option<NodeState>,
    pub connection_state: ConnectionState,
    pub production: ProductionState,
    pub current_interval_seconds: f64,
    pub tick_count: u64,
    pub last_outcome: Option<TickOutcome>,
    pub last_error: Option<String>,
    pub stats: Vec<StatsFrame>,
    pub updated_at: DateTime<Utc>,
}

impl MonitorSnapshot {
    pub fn empty(host: &str) -> Self {
        Self {
            host: host.to_string(),
            online: None,
            connection_state: ConnectionState::Unknown,
            production: ProductionState::default(),
            current_interval_seconds: 0.0,
            tick_count: 0,
            last_outcome: None,
            last_error: None,
            stats: Vec::new(),
            updated_at: Utc::now(),
        }
    }
}
