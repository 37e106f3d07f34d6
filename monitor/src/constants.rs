//! Thresholds, limits and default configuration values
//!
//! Every magic number the monitoring loop relies on lives here, grouped by
//! the component that consumes it.

use std::time::Duration;

/// State-transition thresholds used by the health trackers
pub mod health {
    /// Consecutive identical observations needed before a state is confirmed
    pub const CONFIRMATION_THRESHOLD: u32 = 3;

    /// Peer count at or below which the node is considered starved
    pub const STARVED_CONNECTION_THRESHOLD: u64 = 5;

    /// Head block age (seconds) below which the node counts as synced
    pub const SYNC_WINDOW_SECONDS: u64 = 60;

    /// Consecutive missed slots before a missed block is reported
    pub const MISSED_BLOCK_CONFIRMATIONS: u32 = 3;
}

/// Resource statistics limits
pub mod stats {
    /// Upper bound on retained samples
    pub const HARD_CAP: usize = 2000;
}

/// Alert delivery constants
pub mod alerts {
    use super::Duration;

    /// Webhook request timeout
    pub const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Default configuration values
pub mod defaults {
    /// Default RPC timeout in seconds
    pub const RPC_TIMEOUT_SECONDS: u64 = 10;

    /// Default bind address for the status API
    pub const WEB_HOST: &str = "127.0.0.1";

    /// Default port for the status API
    pub const WEB_PORT: u16 = 5000;

    /// Default amount of history kept, in seconds
    pub const TIME_SPAN_SECONDS: u64 = 3600;

    /// Default polling interval while the stats ring fills up
    pub const TIME_INTERVAL_SECONDS: u64 = 15;

    /// Name of the delegate client process on the local machine
    pub const PROCESS_NAME: &str = "bitshares_client";
}
