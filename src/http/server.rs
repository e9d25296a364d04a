//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum app that feeds every request into [`dispatch`]
//! - Wire up middleware (request ID, tracing, timeout, body limit)
//! - Translate between HTTP and the router's `Response`
//! - Own the failure boundary: handler errors become 500
//!
//! # Design Decisions
//! - A single fallback handler; Axum's own routing is not used
//! - Request bodies are read as JSON; an empty body is "absent" and a body
//!   that is not JSON is passed on as a JSON string
//! - Methods outside GET/POST/PUT/DELETE are answered 404, same as no match

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{self, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{ListenerConfig, ServerConfig};
use crate::http::dispatch::dispatch;
use crate::http::response::Response;
use crate::routing::{Method, Router};

/// Error type for server operations.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into the fallback handler.
#[derive(Clone)]
pub struct AppState {
    pub router: Router,
}

/// HTTP front end for a [`Router`].
pub struct HttpServer {
    app: axum::Router,
    config: ServerConfig,
}

impl HttpServer {
    pub fn new(config: ServerConfig, router: Router) -> Self {
        tracing::info!(routes = router.len(), "HTTP server configured");
        let app = Self::build_app(&config, AppState { router });
        Self { app, config }
    }

    /// Build the Axum app with all middleware layers.
    #[allow(deprecated)]
    fn build_app(config: &ServerConfig, state: AppState) -> axum::Router {
        axum::Router::new()
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.limits.max_body_size))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// The configured app, for driving it without a socket.
    pub fn app(&self) -> axum::Router {
        self.app.clone()
    }

    /// Serve on `listener` until `shutdown` completes.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            max_body_size = self.config.limits.max_body_size,
            "HTTP server starting"
        );

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Bind the configured listener address.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ServerError> {
    TcpListener::bind(config.bind_address.as_str())
        .await
        .map_err(|source| ServerError::Bind {
            address: config.bind_address.clone(),
            source,
        })
}

/// Resolves on Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn dispatch_handler(
    State(state): State<AppState>,
    http_method: http::Method,
    uri: Uri,
    body: Bytes,
) -> axum::response::Response {
    let path = uri.path();

    let Ok(method) = http_method.as_str().parse::<Method>() else {
        tracing::debug!(method = %http_method, path = %path, "Unsupported method");
        return render(Response::not_found());
    };

    match dispatch(&state.router, path, method, decode_body(&body)).await {
        Ok(response) => render(response),
        Err(e) => {
            tracing::error!(error = %e, "Handler failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

fn decode_body(bytes: &[u8]) -> Option<Value> {
    if bytes.is_empty() {
        return None;
    }
    Some(
        serde_json::from_slice(bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned())),
    )
}

fn render(response: Response) -> axum::response::Response {
    let status = StatusCode::from_u16(response.status).unwrap_or_else(|_| {
        tracing::warn!(status = response.status, "Handler returned an invalid status code");
        StatusCode::INTERNAL_SERVER_ERROR
    });

    match response.body {
        Some(body) => (status, Json(body)).into_response(),
        None => status.into_response(),
    }
}
