// File: monitor/src/config/mod.rs
pub mod manager;
use crate::constants::defaults;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
pub use manager::ConfigManager;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_web_host")]
    pub host: String,
    #[serde(default = "default_web_port")]
    pub port: u16,
    #[serde(default = "default_rpc_timeout")]
    pub rpc_timeout_seconds: u64,
    #[serde(default)]
    pub alarm_webhook_url: String,
    pub monitoring: MonitoringConfig,
    // Populated from individual node config files
    #[serde(skip)]
    pub nodes: HashMap<String, NodeConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    /// Host of the node to monitor, must match one of the configured nodes
    pub host: String,
    /// Seconds of history to retain in the stats ring
    #[serde(default = "default_time_span")]
    pub time_span: u64,
    /// Polling interval in seconds while the stats ring fills up
    #[serde(default = "default_time_interval")]
    pub time_interval: u64,
    #[serde(default = "default_process_name")]
    pub process_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfigFile {
    pub node: NodeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    // Defaults to the config file stem when omitted
    #[serde(default)]
    pub host: String,
    pub rpc_url: String,
    pub rpc_user: Option<String>,
    pub rpc_password: Option<String>,
    pub delegate_name: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_web_host() -> String {
    defaults::WEB_HOST.to_string()
}

fn default_web_port() -> u16 {
    defaults::WEB_PORT
}

fn default_rpc_timeout() -> u64 {
    defaults::RPC_TIMEOUT_SECONDS
}

fn default_time_span() -> u64 {
    defaults::TIME_SPAN_SECONDS
}

fn default_time_interval() -> u64 {
    defaults::TIME_INTERVAL_SECONDS
}

fn default_process_name() -> String {
    defaults::PROCESS_NAME.to_string()
}

fn default_enabled() -> bool {
    true
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let monitoring = &self.monitoring;

        if monitoring.time_interval == 0 {
            return Err(ConfigError::InvalidValue {
                field: "monitoring.time_interval".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        if monitoring.time_span < monitoring.time_interval {
            return Err(ConfigError::InvalidValue {
                field: "monitoring.time_span".to_string(),
                reason: format!(
                    "{}s is shorter than the polling interval of {}s",
                    monitoring.time_span, monitoring.time_interval
                ),
            });
        }

        if self.rpc_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "rpc_timeout_seconds".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Find the enabled node selected by `monitoring.host`.
    pub fn monitored_node(&self) -> Result<(&str, &NodeConfig), ConfigError> {
        self.nodes
            .iter()
            .find(|(_, node)| node.enabled && node.host == self.monitoring.host)
            .map(|(name, node)| (name.as_str(), node))
            .ok_or_else(|| {
                let mut available: Vec<String> = self
                    .nodes
                    .values()
                    .filter(|n| n.enabled)
                    .map(|n| n.host.clone())
                    .collect();
                available.sort();
                ConfigError::UnknownHost {
                    host: self.monitoring.host.clone(),
                    available,
                }
            })
    }

    pub fn time_span(&self) -> Duration {
        Duration::from_secs(self.monitoring.time_span)
    }

    pub fn time_interval(&self) -> Duration {
        Duration::from_secs(self.monitoring.time_interval)
    }
}
