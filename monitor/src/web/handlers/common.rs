// Common types and utilities for API handlers

use axum::{http::StatusCode, response::Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::health::{MonitorSnapshot, NodeState};
use crate::web::DelegateStatusSummary;

// Helper type for API responses
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, (StatusCode, Json<ApiResponse<()>>)>;

#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Deserialize)]
pub struct StatsQuery {
    /// Only return the most recent `limit` frames
    pub limit: Option<usize>,
}

pub fn convert_snapshot_to_summary(snapshot: &MonitorSnapshot) -> DelegateStatusSummary {
    let status = match snapshot.online {
        Some(NodeState::Online) => "Online",
        Some(NodeState::Offline) => "Offline",
        None => "Unknown",
    };

    DelegateStatusSummary {
        host: snapshot.host.clone(),
        status: status.to_string(),
        connection_state: snapshot.connection_state,
        producing: snapshot.production.last_producing,
        missed_count: snapshot.production.missed_count,
        current_interval_seconds: snapshot.current_interval_seconds,
        tick_count: snapshot.tick_count,
        last_outcome: snapshot.last_outcome,
        last_error: snapshot.last_error.clone(),
        samples: snapshot.stats.len(),
        updated_at: snapshot.updated_at.to_rfc3339(),
    }
}
