//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Register the fixed route table on an Axum Router
//! - Wire up middleware (timeout, request ID, tracing)
//! - Translate matched path segments into object keys
//! - Fetch from the object store with the delegated credential
//! - Shape every outcome through the response contract

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{RawPathParams, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::http::request::{RequestIdLayer, X_REQUEST_ID};
use crate::http::response;
use crate::observability::metrics;
use crate::routing;
use crate::store::key::object_key;
use crate::store::{CredentialError, DelegatedCredential, ObjectStore, StoreError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ObjectStore>,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Resolves the delegated credential; a missing or malformed token
    /// is a startup failure, never a per-request one.
    pub fn new(config: GatewayConfig) -> Result<Self, CredentialError> {
        let credential = DelegatedCredential::resolve(&config.object_store)?;
        let store = ObjectStore::new(&config.object_store, &credential, &config.timeouts)?;

        let state = AppState {
            store: Arc::new(store),
        };
        let router = Self::build_router(&config, state);

        Ok(Self { router, config })
    }

    /// Build the Axum router: the route table, the fallback, and the
    /// middleware stack.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        let mut router = Router::new();
        for template in &routing::TEMPLATES {
            router = router.route(template.pattern, get(serve_asset));
        }

        router
            .fallback(unmatched)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until Ctrl+C or the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Handler shared by both asset routes.
///
/// The route table guarantees arity; params arrive in declaration order
/// and without percent-decoding.
async fn serve_asset(
    State(state): State<AppState>,
    params: RawPathParams,
    headers: HeaderMap,
) -> Response {
    let start = Instant::now();
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let segments: Vec<&str> = params.iter().map(|(_, value)| value).collect();
    let route = routing::template_for(segments.len())
        .map(|t| t.pattern)
        .unwrap_or("unknown");
    let key = object_key(&segments);

    tracing::debug!(request_id = %request_id, key = %key, "Fetching object");

    match state.store.fetch(&key).await {
        Ok(backend) => {
            let status = backend.status();
            tracing::debug!(
                request_id = %request_id,
                key = %key,
                status = %status,
                "Object store answered"
            );
            metrics::record_request(route, status.as_u16(), start);
            response::shape(backend)
        }
        Err(StoreError::Timeout(deadline)) => {
            tracing::warn!(
                request_id = %request_id,
                key = %key,
                deadline = ?deadline,
                "Object store call timed out"
            );
            metrics::record_request(route, StatusCode::GATEWAY_TIMEOUT.as_u16(), start);
            response::cors_only(StatusCode::GATEWAY_TIMEOUT)
        }
        Err(error) => {
            tracing::error!(
                request_id = %request_id,
                key = %key,
                error = %error,
                "Object store call failed"
            );
            metrics::record_request(route, StatusCode::BAD_GATEWAY.as_u16(), start);
            response::cors_only(StatusCode::BAD_GATEWAY)
        }
    }
}

/// Fallback for requests matching no route template. Answers with the
/// CORS-only error shape without touching the object store.
async fn unmatched(headers: HeaderMap) -> Response {
    let start = Instant::now();
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::warn!(request_id = %request_id, "No route matched");
    metrics::record_request("unmatched", StatusCode::NOT_FOUND.as_u16(), start);
    response::cors_only(StatusCode::NOT_FOUND)
}

/// Wait for Ctrl+C or a shutdown broadcast.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
        _ = shutdown.recv() => {
            tracing::info!("Shutdown broadcast received");
        }
    }
}
