//! HTTP request handlers for the monitor API.
//!
//! - `common` - Shared response envelope and query structs
//! - `config` - Read-only configuration endpoints
//! - `health` - Delegate status and resource statistics

pub mod common;
pub mod config;
pub mod health;

pub use config::*;
pub use health::*;
