// API Server Implementation

use crate::api::{config::ApiConfig, middleware, routes, state::AppState};
use crate::error::LoadError;
use anyhow::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tracing::info;

/// API Server
pub struct ApiServer {
    config: ApiConfig,
    state: Arc<AppState>,
}

impl ApiServer {
    /// Create new API server, loading the tag database named in `config`
    ///
    /// Loading is synchronous and completes before any listener exists, so a
    /// failed load means the server never accepts a request.
    pub fn new(config: ApiConfig) -> Result<Self, LoadError> {
        let state = Arc::new(AppState::load(config.clone())?);

        Ok(Self { config, state })
    }

    /// Create a server around prebuilt state
    pub fn with_state(state: Arc<AppState>) -> Self {
        Self {
            config: state.config.as_ref().clone(),
            state,
        }
    }

    /// Build the router
    fn build_router(&self) -> Router {
        let mut router = Router::new()
            // Lookup routes
            .route("/ip-tags/:ip", get(routes::tags::get_ip_tags))
            .route("/ip-tags", get(routes::tags::missing_address))
            .route("/ip-tags/", get(routes::tags::missing_address))
            // Report routes
            .route("/ip-tags-report/:ip", get(routes::report::get_ip_tags_report))
            .route("/ip-tags-report", get(routes::tags::missing_address))
            .route("/ip-tags-report/", get(routes::tags::missing_address))
            // Health check
            .route("/health", get(routes::health::health_check))
            // Add OpenAPI/Swagger UI if enabled
            .merge(self.swagger_routes())
            .fallback(routes::not_found)
            // Add request timeout
            .layer(middleware::timeout_layer(self.config.request_timeout_seconds))
            // Add compression
            .layer(CompressionLayer::new());

        if self.config.enable_cors {
            router = router.layer(middleware::cors_layer());
        }

        router
            // Add logging
            .layer(middleware::logging_layer())
            // Add shared state
            .with_state(self.state.clone())
    }

    /// Build Swagger UI routes
    fn swagger_routes(&self) -> Router<Arc<AppState>> {
        if self.config.enable_swagger {
            use utoipa::OpenApi;
            use utoipa_swagger_ui::SwaggerUi;

            let openapi = crate::api::openapi::ApiDoc::openapi();

            Router::new().merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
        } else {
            Router::new()
        }
    }

    /// Run the server until Ctrl-C
    pub async fn run(self) -> Result<()> {
        let app = self.build_router();

        let addr = self.config.bind_address();
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!(
            "iptags API server listening on {} ({} tag entries)",
            addr,
            self.state.database.len()
        );
        if self.config.enable_swagger {
            info!("OpenAPI documentation available at: http://{}/api/docs", addr);
        }

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("iptags API server stopped");
        Ok(())
    }

    /// Get the application state
    pub fn state(&self) -> Arc<AppState> {
        self.state.clone()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::TagDatabase;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[test]
    fn test_server_requires_database() {
        let config = ApiConfig {
            database_path: "/nonexistent/ip_base.json".into(),
            ..ApiConfig::default()
        };
        assert!(ApiServer::new(config).is_err());
    }

    #[tokio::test]
    async fn test_router_build() {
        let state = Arc::new(AppState::new(ApiConfig::default(), TagDatabase::default()));
        let server = ApiServer::with_state(state);
        let _router = server.build_router();
    }

    async fn send(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn lookup_router() -> Router {
        let database = TagDatabase::from_json_str(
            r#"[{"tag": "foo", "ip_network": "192.0.2.0/24"}, {"tag": "bar", "ip_network": "192.0.2.8/29"}]"#,
        )
        .unwrap();
        let state = Arc::new(AppState::new(ApiConfig::default(), database));
        ApiServer::with_state(state).build_router()
    }

    #[tokio::test]
    async fn test_routes_missing_address() {
        let router = lookup_router();

        for uri in [
            "/ip-tags",
            "/ip-tags/",
            "/ip-tags/%20",
            "/ip-tags-report",
            "/ip-tags-report/",
            "/ip-tags-report/%20",
        ] {
            let (status, body) = send(router.clone(), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["error"], "MISSING_ADDRESS", "{uri}");
        }
    }

    #[tokio::test]
    async fn test_routes_lookup() {
        let (status, body) = send(lookup_router(), "/ip-tags/192.0.2.10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!(["bar", "foo"]));
    }

    #[tokio::test]
    async fn test_routes_invalid_address() {
        let (status, body) = send(lookup_router(), "/ip-tags/198.51..22").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "INVALID_ADDRESS");
    }

    #[tokio::test]
    async fn test_routes_report_is_html() {
        let request = Request::builder()
            .uri("/ip-tags-report/192.0.2.10")
            .body(Body::empty())
            .unwrap();
        let response = lookup_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("<td>bar<hr>foo<hr></td>"));
    }

    #[tokio::test]
    async fn test_routes_unknown_path() {
        let (status, body) = send(lookup_router(), "/ip-tags-summary/192.0.2.10").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn test_routes_health() {
        let (status, body) = send(lookup_router(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["entries"], 2);
    }

    #[tokio::test]
    async fn test_router_build_with_swagger_and_cors() {
        let config = ApiConfig {
            enable_swagger: true,
            enable_cors: true,
            ..ApiConfig::default()
        };
        let state = Arc::new(AppState::new(config, TagDatabase::default()));
        let _router = ApiServer::with_state(state).build_router();
    }
}
