//! In-memory stand-ins for the node, the local process and the alert sink
//!
//! These let tests drive the monitoring loop tick by tick without a running
//! delegate client.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use delegate_monitor::health::{NodeInfo, Streak};
use delegate_monitor::process::{ProcessHandle, ProcessLookup};
use delegate_monitor::{NodeHandle, NotificationSink};
use std::collections::VecDeque;
use std::sync::Mutex;

/// What the node reports during one tick
#[derive(Debug, Clone)]
pub struct TickScript {
    pub online: bool,
    pub connections: u64,
    pub head_block_age: u64,
    pub producing: bool,
    pub fail_get_info: bool,
}

impl TickScript {
    pub fn online() -> Self {
        Self {
            online: true,
            connections: 10,
            head_block_age: 3,
            producing: true,
            fail_get_info: false,
        }
    }

    pub fn offline() -> Self {
        Self {
            online: false,
            ..Self::online()
        }
    }

    pub fn connections(mut self, connections: u64) -> Self {
        self.connections = connections;
        self
    }

    pub fn head_block_age(mut self, seconds: u64) -> Self {
        self.head_block_age = seconds;
        self
    }

    pub fn producing(mut self, producing: bool) -> Self {
        self.producing = producing;
        self
    }

    pub fn failing_info(mut self) -> Self {
        self.fail_get_info = true;
        self
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NodeCalls {
    pub clear_cache: usize,
    pub get_info: usize,
    pub get_streak: usize,
}

/// Node that replays one [`TickScript`] per tick.
///
/// Each `clear_rpc_cache` call (the first thing a tick does) advances to the
/// next script; once the script runs out the last entry keeps repeating.
pub struct ScriptedNode {
    host: String,
    scripts: Mutex<VecDeque<TickScript>>,
    current: Mutex<TickScript>,
    calls: Mutex<NodeCalls>,
}

impl ScriptedNode {
    pub fn new(host: &str, scripts: Vec<TickScript>) -> Self {
        Self {
            host: host.to_string(),
            scripts: Mutex::new(scripts.into()),
            current: Mutex::new(TickScript::online()),
            calls: Mutex::new(NodeCalls::default()),
        }
    }

    pub fn localhost(scripts: Vec<TickScript>) -> Self {
        Self::new("localhost", scripts)
    }

    /// Append more ticks to the script
    pub fn push(&self, scripts: impl IntoIterator<Item = TickScript>) {
        self.scripts.lock().unwrap().extend(scripts);
    }

    pub fn calls(&self) -> NodeCalls {
        *self.calls.lock().unwrap()
    }

    fn current(&self) -> TickScript {
        self.current.lock().unwrap().clone()
    }
}

#[async_trait]
impl NodeHandle for ScriptedNode {
    fn host(&self) -> &str {
        &self.host
    }

    async fn clear_rpc_cache(&self) {
        self.calls.lock().unwrap().clear_cache += 1;
        if let Some(next) = self.scripts.lock().unwrap().pop_front() {
            *self.current.lock().unwrap() = next;
        }
    }

    async fn is_online(&self) -> bool {
        self.current().online
    }

    async fn get_info(&self) -> Result<NodeInfo> {
        self.calls.lock().unwrap().get_info += 1;
        let script = self.current();
        if script.fail_get_info {
            return Err(anyhow!("connection reset by peer"));
        }
        Ok(NodeInfo {
            network_num_connections: script.connections,
            blockchain_head_block_age: script.head_block_age,
        })
    }

    async fn get_streak(&self) -> Result<Streak> {
        self.calls.lock().unwrap().get_streak += 1;
        Ok(Streak {
            producing: self.current().producing,
            streak_length: 1,
        })
    }
}

/// Process lookup returning a fixed reading, or failing when none is set
pub struct FakeProcessLookup {
    handle: Option<ProcessHandle>,
}

impl FakeProcessLookup {
    pub fn running(cpu_percent: f64, rss: u64) -> Self {
        Self {
            handle: Some(ProcessHandle::new(4242, cpu_percent, rss)),
        }
    }

    pub fn missing() -> Self {
        Self { handle: None }
    }
}

impl ProcessLookup for FakeProcessLookup {
    fn current_process_handle(&mut self) -> Result<ProcessHandle> {
        self.handle
            .clone()
            .ok_or_else(|| anyhow!("No running process named 'bitshares_client'"))
    }
}

/// Notification sink that keeps every message
#[derive(Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<(String, bool)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<(String, bool)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn urgent(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter(|(_, urgent)| *urgent)
            .map(|(message, _)| message)
            .collect()
    }

    pub fn count_containing(&self, needle: &str) -> usize {
        self.notifications()
            .iter()
            .filter(|(message, _)| message.contains(needle))
            .count()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, message: &str, urgent: bool) {
        self.sent.lock().unwrap().push((message.to_string(), urgent));
    }
}
