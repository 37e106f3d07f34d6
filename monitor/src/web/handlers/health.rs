// Delegate status endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use tracing::debug;

use super::common::{convert_snapshot_to_summary, ApiResponse, ApiResult, StatsQuery};
use crate::stats::StatsFrame;
use crate::web::{AppState, DelegateStatusSummary};

/// Confirmed states and loop progress of the monitored delegate
pub async fn get_delegate_status(State(state): State<AppState>) -> ApiResult<DelegateStatusSummary> {
    let snapshot = state.latest();
    Ok(Json(ApiResponse::success(convert_snapshot_to_summary(
        &snapshot,
    ))))
}

/// Retained resource samples, oldest first
pub async fn get_delegate_stats(
    Query(query): Query<StatsQuery>,
    State(state): State<AppState>,
) -> ApiResult<Vec<StatsFrame>> {
    if query.limit == Some(0) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("limit must be greater than zero".to_string())),
        ));
    }

    let snapshot = state.latest();
    let frames = match query.limit {
        Some(limit) if limit < snapshot.stats.len() => {
            snapshot.stats[snapshot.stats.len() - limit..].to_vec()
        }
        _ => snapshot.stats.clone(),
    };

    debug!("Serving {} of {} stats frames", frames.len(), snapshot.stats.len());
    Ok(Json(ApiResponse::success(frames)))
}
