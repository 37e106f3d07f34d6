// Read-only configuration endpoints

use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use super::common::{ApiResponse, ApiResult};
use crate::web::AppState;

/// Monitoring settings and the configured node hosts (credentials omitted)
pub async fn get_monitoring_config(State(state): State<AppState>) -> ApiResult<Value> {
    let mut hosts: Vec<&str> = state.config.nodes.values().map(|n| n.host.as_str()).collect();
    hosts.sort();

    Ok(Json(ApiResponse::success(json!({
        "monitoring": state.config.monitoring,
        "nodes": hosts
    }))))
}
