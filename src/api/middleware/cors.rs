// CORS Middleware

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Read-only CORS layer; the API only serves GET requests
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}
