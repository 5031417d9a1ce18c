//! Table statistics endpoint

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use super::ApiResponse;
use crate::api::state::AppState;

/// GET /api/table/stats - Row count and distinct levels, units, topics
pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::new(state.table.stats()))
}
