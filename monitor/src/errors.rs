//! Custom error types for the delegate monitor
//!
//! Provides structured error handling with context for different failure scenarios.

use std::fmt;

/// Configuration error variants
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to load configuration file
    LoadFailed { path: String, reason: String },

    /// Invalid configuration value
    InvalidValue { field: String, reason: String },

    /// Configuration parsing error
    ParseError { path: String, reason: String },

    /// Monitored host does not match any configured node
    UnknownHost { host: String, available: Vec<String> },
}

/// Node RPC error variants
#[derive(Debug)]
pub enum RpcError {
    /// HTTP transport failed or timed out
    Transport { url: String, reason: String },

    /// Node answered with a JSON-RPC error object
    Remote { method: String, code: i64, message: String },

    /// Response did not have the expected shape
    InvalidResponse { method: String, reason: String },
}

/// Process lookup error variants
#[derive(Debug)]
pub enum ProcessError {
    /// No process with the configured name is running
    NotRunning { name: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path, reason)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
            ConfigError::ParseError { path, reason } => {
                write!(f, "Failed to parse config '{}': {}", path, reason)
            }
            ConfigError::UnknownHost { host, available } => {
                write!(
                    f,
                    "\"{}\" is not a valid host name. Available: {}",
                    host,
                    available.join(", ")
                )
            }
        }
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcError::Transport { url, reason } => {
                write!(f, "Request to {} failed: {}", url, reason)
            }
            RpcError::Remote {
                method,
                code,
                message,
            } => {
                write!(f, "'{}' returned error {}: {}", method, code, message)
            }
            RpcError::InvalidResponse { method, reason } => {
                write!(f, "Invalid response to '{}': {}", method, reason)
            }
        }
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::NotRunning { name } => {
                write!(f, "No running process named '{}'", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
impl std::error::Error for RpcError {}
impl std::error::Error for ProcessError {}
