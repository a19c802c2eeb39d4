// Health Check Route

use crate::api::{models::response::HealthResponse, state::AppState};
use axum::{extract::State, Json};
use std::sync::Arc;

/// Health check endpoint
///
/// Returns the health status of the service and the size of the loaded database
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        entries: state.database.len(),
        malformed_entries: state.database.malformed_count(),
    })
}
