// Tag Report Route

use crate::api::{
    models::error::{ApiError, ApiErrorResponse},
    routes::require_address,
    state::AppState,
};
use crate::output::html::generate_tags_report;
use axum::{
    extract::{Path, State},
    response::Html,
};
use std::sync::Arc;

/// Get an HTML report of the tags for an IP address
#[utoipa::path(
    get,
    path = "/ip-tags-report/{ip}",
    tag = "tags",
    params(
        ("ip" = String, Path, description = "IPv4 or IPv6 address")
    ),
    responses(
        (status = 200, description = "HTML table of matching tags", body = String, content_type = "text/html"),
        (status = 400, description = "Missing or invalid address", body = ApiErrorResponse)
    )
)]
pub async fn get_ip_tags_report(
    State(state): State<Arc<AppState>>,
    Path(ip): Path<String>,
) -> Result<Html<String>, ApiError> {
    let ip = require_address(&ip)?;
    let tags = state.database.tags_for_address(ip)?;
    let html = generate_tags_report(ip, &tags)?;
    Ok(Html(html))
}
