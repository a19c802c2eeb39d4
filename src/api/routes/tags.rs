// Tag Lookup Routes

use crate::api::{
    models::error::{ApiError, ApiErrorResponse},
    routes::require_address,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

/// Get tags for an IP address
///
/// Returns the sorted, deduplicated tags of every network containing the address
#[utoipa::path(
    get,
    path = "/ip-tags/{ip}",
    tag = "tags",
    params(
        ("ip" = String, Path, description = "IPv4 or IPv6 address")
    ),
    responses(
        (status = 200, description = "Matching tags", body = Vec<String>),
        (status = 400, description = "Missing or invalid address", body = ApiErrorResponse)
    )
)]
pub async fn get_ip_tags(
    State(state): State<Arc<AppState>>,
    Path(ip): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let ip = require_address(&ip)?;
    let tags = state.database.tags_for_address(ip)?;
    Ok(Json(tags))
}

/// Address segment absent from the path
pub async fn missing_address() -> ApiError {
    ApiError::MissingAddress
}
