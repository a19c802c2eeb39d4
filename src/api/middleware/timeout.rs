// Request Timeout Middleware

use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

/// Abort requests that run longer than `seconds`
pub fn timeout_layer(seconds: u64) -> TimeoutLayer {
    TimeoutLayer::new(Duration::from_secs(seconds))
}
