//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the gas-check handlers
//! - Wire up middleware (request ID, tracing, body limit, CORS)
//! - Bind server to listener
//! - Shut down gracefully on the shutdown broadcast

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::{CorsConfig, ProxyConfig};
use crate::gas::handlers::{full_report, health, quick_check};
use crate::gas::{BackendClient, GasCheckResult};
use crate::http::request::UuidRequestId;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<BackendClient>,
    pub report_cache_secs: u64,
}

/// HTTP server for the gas-check proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> GasCheckResult<Self> {
        let backend = Arc::new(BackendClient::new(&config.backend)?);

        let state = AppState {
            backend,
            report_cache_secs: config.backend.report_cache_secs,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/api/gas", get(full_report).post(quick_check))
            .route("/health", get(health))
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.listener.max_body_bytes));

        if let Some(cors) = cors_layer(&config.cors) {
            router = router.layer(cors);
        }

        // Outermost: the ID exists before the trace span opens and is echoed back.
        router
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until the shutdown signal fires, draining in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backend = %self.config.backend.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// CORS layer for the configured origins; `None` when no origin is allowed.
fn cors_layer(config: &CorsConfig) -> Option<CorsLayer> {
    if config.allowed_origins.is_empty() {
        return None;
    }

    let origin = if config.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(v) => Some(v),
                Err(_) => {
                    tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn server(cors: &[&str]) -> HttpServer {
        let mut config = ProxyConfig::default();
        config.backend.system_proxy = false;
        config.cors.allowed_origins = cors.iter().map(|o| o.to_string()).collect();
        HttpServer::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_request_id_generated_and_echoed() {
        let response = server(&[])
            .router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let id = response.headers().get("x-request-id").unwrap().to_str().unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }

    #[tokio::test]
    async fn test_incoming_request_id_kept() {
        let response = server(&[])
            .router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("x-request-id", "trace-me")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers().get("x-request-id").unwrap(), "trace-me");
    }

    #[tokio::test]
    async fn test_cors_allowed_origin() {
        let response = server(&["http://localhost:3000"])
            .router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn test_cors_disabled_by_default() {
        let response = server(&[])
            .router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_oversized_body_rejected() {
        let mut config = ProxyConfig::default();
        config.backend.system_proxy = false;
        config.listener.max_body_bytes = 16;
        let router = HttpServer::new(config).unwrap().router();

        let body = format!(r#"{{"username":"{}"}}"#, "a".repeat(64));
        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/gas")
                    .header(header::CONTENT_LENGTH, body.len())
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = server(&[])
            .router()
            .oneshot(Request::builder().uri("/api/other").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
