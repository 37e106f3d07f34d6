// File: monitor/src/main.rs
use anyhow::Result;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use delegate_monitor::web::start_web_server;
use delegate_monitor::{
    AlertService, BtsRpcClient, ConfigManager, MonitorLoop, NodeHandle, NotificationSink,
    SysinfoProcessLookup,
};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("delegate_monitor=info".parse()?)
        .add_directive("tower_http=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Starting Delegate Monitor");

    let config_dir = std::env::args().nth(1).unwrap_or_else(|| "config".to_string());
    let config_manager = ConfigManager::new(config_dir).await?;
    let config = config_manager.get_current_config();

    // Unknown monitored host is fatal, the loop never starts
    let (node_name, node_config) = config.monitored_node()?;
    info!(
        "Monitoring node {} ({}) for delegate {}",
        node_name, node_config.host, node_config.delegate_name
    );

    let node: Arc<dyn NodeHandle> =
        Arc::new(BtsRpcClient::new(node_config, config.rpc_timeout_seconds)?);

    let alert_service = AlertService::new(
        config.alarm_webhook_url.clone(),
        node_config.delegate_name.clone(),
        node_config.host.clone(),
    )?;

    if alert_service.is_enabled() {
        info!(
            "Alert service enabled with webhook: {}",
            alert_service.get_webhook_url()
        );
        match alert_service.test_webhook().await {
            Ok(()) => info!("Alert webhook test successful!"),
            Err(e) => {
                error!("Alert webhook test failed: {}", e);
                warn!("Alerts may not work properly. Check your webhook URL and network connectivity.");
            }
        }
    } else {
        warn!("Alert service disabled: no alarm_webhook_url in main.toml");
    }

    let notifier: Arc<dyn NotificationSink> = Arc::new(alert_service);
    let process_lookup = Box::new(SysinfoProcessLookup::new(
        config.monitoring.process_name.clone(),
    ));

    let monitor = MonitorLoop::new(
        node,
        process_lookup,
        notifier,
        config.time_span(),
        config.time_interval(),
    );
    let snapshots = monitor.subscribe();

    let shutdown = CancellationToken::new();
    let monitor_handle = tokio::spawn(monitor.run(shutdown.clone()));

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", e);
            return;
        }
        info!("Shutdown requested");
        signal_token.cancel();
    });

    let server_result = start_web_server(config.clone(), snapshots, shutdown.clone()).await;

    // The server can also stop on its own (e.g. bind failure)
    shutdown.cancel();
    if let Err(e) = monitor_handle.await {
        error!("Monitoring task panicked: {}", e);
    }

    server_result
}
