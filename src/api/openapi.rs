// OpenAPI Documentation

use crate::api::{
    models::{error::ApiErrorResponse, response::HealthResponse},
    routes,
};
use utoipa::OpenApi;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        routes::tags::get_ip_tags,
        routes::report::get_ip_tags_report,
        routes::health::health_check,
    ),
    components(
        schemas(
            HealthResponse,
            ApiErrorResponse,
        )
    ),
    tags(
        (name = "tags", description = "IP address tag lookup"),
        (name = "health", description = "Service health"),
    ),
    info(
        title = "iptags API",
        description = "Match IP addresses against tagged CIDR networks",
    )
)]
pub struct ApiDoc;
