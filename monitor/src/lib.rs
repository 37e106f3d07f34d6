pub mod config;
pub mod constants;
pub mod errors;
pub mod health;
pub mod process;
pub mod rpc;
pub mod services;
pub mod stats;
pub mod web;

// Re-export commonly used types
pub use config::{Config, ConfigManager, MonitoringConfig, NodeConfig};
pub use health::{MonitorLoop, MonitorSnapshot};
pub use process::{ProcessLookup, SysinfoProcessLookup};
pub use rpc::{BtsRpcClient, NodeHandle};
pub use services::{AlertService, NotificationSink};
pub use stats::{SamplingScheduler, StatsFrame, StatsRing};
