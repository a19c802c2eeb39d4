// API Routes Module

pub mod health;
pub mod report;
pub mod tags;

use crate::api::models::error::ApiError;

/// Fallback for routes that do not exist
pub async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

/// Reject an address path segment that is empty or whitespace
pub(crate) fn require_address(ip: &str) -> Result<&str, ApiError> {
    if ip.trim().is_empty() {
        Err(ApiError::MissingAddress)
    } else {
        Ok(ip)
    }
}
