// File: monitor/src/health/monitor.rs
use super::connections::ConnectionHealthTracker;
use super::debounce::DebouncedStateTracker;
use super::production::{ProductionEvent, ProductionTracker};
use super::types::{ConnectionEvent, MonitorSnapshot, NodeInfo, NodeState, TickOutcome};
use crate::constants::health::{STARVED_CONNECTION_THRESHOLD, SYNC_WINDOW_SECONDS};
use crate::process::ProcessLookup;
use crate::rpc::NodeHandle;
use crate::services::NotificationSink;
use crate::stats::{SamplingScheduler, StatsFrame, StatsRing};
use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

pub fn is_local_host(host: &str) -> bool {
    matches!(host, "localhost" | "127.0.0.1" | "::1")
}

/// Periodic health check of one delegate node.
///
/// Owns the stats ring and every tracker exclusively. Readers get an
/// immutable [`MonitorSnapshot`] through [`MonitorLoop::subscribe`], which is
/// republished after each tick.
pub struct MonitorLoop {
    node: Arc<dyn NodeHandle>,
    process_lookup: Box<dyn ProcessLookup>,
    notifier: Arc<dyn NotificationSink>,
    ring: StatsRing,
    scheduler: SamplingScheduler,
    online: DebouncedStateTracker<NodeState>,
    connections: ConnectionHealthTracker,
    production: ProductionTracker,
    tick_count: u64,
    last_outcome: Option<TickOutcome>,
    last_error: Option<String>,
    snapshot_tx: watch::Sender<Arc<MonitorSnapshot>>,
}

impl MonitorLoop {
    pub fn new(
        node: Arc<dyn NodeHandle>,
        process_lookup: Box<dyn ProcessLookup>,
        notifier: Arc<dyn NotificationSink>,
        time_span: Duration,
        time_interval: Duration,
    ) -> Self {
        let (snapshot_tx, _) = watch::channel(Arc::new(MonitorSnapshot::empty(node.host())));

        Self {
            node,
            process_lookup,
            notifier,
            ring: StatsRing::for_window(time_span, time_interval),
            scheduler: SamplingScheduler::new(time_span, time_interval),
            online: DebouncedStateTracker::new(),
            connections: ConnectionHealthTracker::new(),
            production: ProductionTracker::new(),
            tick_count: 0,
            last_outcome: None,
            last_error: None,
            snapshot_tx,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<MonitorSnapshot>> {
        self.snapshot_tx.subscribe()
    }

    /// Run until `cancel` fires. Cancellation is only observed while sleeping
    /// between ticks.
    pub async fn run(mut self, cancel: CancellationToken) {
        info!("Starting monitoring loop for {}", self.node.host());

        loop {
            let interval = self.scheduler.next_interval(&self.ring);

            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Monitoring loop for {} stopped", self.node.host());
                    break;
                }
                _ = tokio::time::sleep(interval) => {}
            }

            self.run_tick().await;
        }
    }

    /// One tick with failure isolation: errors are logged and kept in the
    /// published snapshot, never propagated.
    pub async fn run_tick(&mut self) -> Option<TickOutcome> {
        debug!("-------- Monitoring status of the delegate node --------");
        self.tick_count += 1;

        let outcome = match self.tick().await {
            Ok(outcome) => {
                debug!("Tick #{} finished: {:?}", self.tick_count, outcome);
                self.last_outcome = Some(outcome);
                self.last_error = None;
                Some(outcome)
            }
            Err(e) => {
                error!("An error occurred in the monitoring loop: {:#}", e);
                self.last_error = Some(e.to_string());
                None
            }
        };

        self.publish();
        outcome
    }

    async fn tick(&mut self) -> Result<TickOutcome> {
        self.node.clear_rpc_cache().await;

        if !self.node.is_online().await {
            self.handle_offline();
            return Ok(TickOutcome::SkippedOffline);
        }
        self.handle_online();

        let info = self.node.get_info().await?;
        self.check_connections(info.network_num_connections);
        self.check_production(&info).await?;

        if !is_local_host(self.node.host()) {
            return Ok(TickOutcome::SkippedNotLocal);
        }

        Ok(self.sample_resources(&info))
    }

    fn handle_offline(&mut self) {
        debug!("Offline");
        if self.online.observe(NodeState::Offline).is_some() {
            warn!("Delegate just went offline...");
            self.notifier.notify("Delegate just went offline...", true);
        }
        self.ring.append(StatsFrame::zero());
    }

    fn handle_online(&mut self) {
        debug!("Online");
        if self.online.observe(NodeState::Online).is_some() {
            info!("Delegate just came online!");
            self.notifier.notify("Delegate just came online!", false);
        }
    }

    fn check_connections(&mut self, connections: u64) {
        match self.connections.observe(connections) {
            Some(ConnectionEvent::Starved) => {
                let message = format!(
                    "Fewer than {} network connections...",
                    STARVED_CONNECTION_THRESHOLD
                );
                warn!("{}", message);
                self.notifier.notify(&message, true);
            }
            Some(ConnectionEvent::Recovered) => {
                let message = format!(
                    "Got more than {} connections now",
                    STARVED_CONNECTION_THRESHOLD
                );
                info!("{}", message);
                self.notifier.notify(&message, false);
            }
            None => {}
        }
    }

    async fn check_production(&mut self, info: &NodeInfo) -> Result<()> {
        if info.blockchain_head_block_age >= SYNC_WINDOW_SECONDS {
            debug!(
                "Head block is {}s old, not checking block production",
                info.blockchain_head_block_age
            );
            return Ok(());
        }

        let streak = self.node.get_streak().await?;
        if let Some(ProductionEvent::MissedBlock) = self.production.observe(streak.producing) {
            warn!("Missed a block!");
            self.notifier.notify("Missed a block!", true);
        }
        Ok(())
    }

    fn sample_resources(&mut self, info: &NodeInfo) -> TickOutcome {
        match self.process_lookup.current_process_handle() {
            Ok(handle) => {
                let frame = StatsFrame::new(
                    handle.cpu_percent(),
                    handle.memory_info().rss,
                    info.network_num_connections,
                );
                self.ring.append(frame);
                debug!("stats len: {}", self.ring.len());
                TickOutcome::Sampled
            }
            Err(e) => {
                warn!("Node answers RPC but its process is unavailable: {}", e);
                self.ring.append(StatsFrame::zero());
                TickOutcome::SkippedOffline
            }
        }
    }

    fn publish(&self) {
        let snapshot = MonitorSnapshot {
            host: self.node.host().to_string(),
            online: self.online.confirmed().copied(),
            connection_state: self.connections.state(),
            production: self.production.state(),
            current_interval_seconds: self.scheduler.current_interval().as_secs_f64(),
            tick_count: self.tick_count,
            last_outcome: self.last_outcome,
            last_error: self.last_error.clone(),
            stats: self.ring.snapshot(),
            updated_at: Utc::now(),
        };
        self.snapshot_tx.send_replace(Arc::new(snapshot));
    }

    pub fn ring(&self) -> &StatsRing {
        &self.ring
    }

    pub fn scheduler(&self) -> &SamplingScheduler {
        &self.scheduler
    }

    pub fn online_tracker(&self) -> &DebouncedStateTracker<NodeState> {
        &self.online
    }

    pub fn connection_tracker(&self) -> &ConnectionHealthTracker {
        &self.connections
    }

    pub fn production_tracker(&self) -> &ProductionTracker {
        &self.production
    }
}
