//! This module provides reusable test utilities:
//! - Scripted node, process lookup and notification sink for the monitoring loop
//! - Mock HTTP servers (node RPC, webhook)
//! - Test configuration builders

// Allow unused code in test fixtures - each test binary uses a subset
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fake_collaborators;
pub mod mock_rpc;
pub mod test_config;

// Re-export commonly used items
pub use fake_collaborators::{FakeProcessLookup, RecordingSink, ScriptedNode, TickScript};
pub use mock_rpc::MockRpcServer;
pub use mock_webhook::MockWebhookServer;
pub use test_config::TestConfigBuilder;
