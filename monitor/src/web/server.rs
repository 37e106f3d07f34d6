// File: monitor/src/web/server.rs
use crate::config::Config;
use crate::health::MonitorSnapshot;
use crate::web::{handlers, AppState};
use anyhow::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub async fn start_web_server(
    config: Arc<Config>,
    snapshots: watch::Receiver<Arc<MonitorSnapshot>>,
    shutdown: CancellationToken,
) -> Result<()> {
    let state = AppState::new(config, snapshots);
    let addr = format!("{}:{}", state.config.host, state.config.port);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;
    Ok(())
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // === DELEGATE MONITORING ROUTES ===
        .route("/api/status", get(handlers::get_delegate_status))
        .route("/api/stats", get(handlers::get_delegate_stats))
        // === CONFIGURATION ROUTES ===
        .route("/api/config/monitoring", get(handlers::get_monitoring_config))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
