// Middleware Module

pub mod cors;
pub mod logging;
pub mod timeout;

pub use cors::cors_layer;
pub use logging::logging_layer;
pub use timeout::timeout_layer;
