//! Request dispatch.
//!
//! # Responsibilities
//! - Resolve (path, method) through the router
//! - Run the route's body schema, if any
//! - Build the [`Request`] and invoke the handler exactly once
//! - Answer 404 when nothing matches
//!
//! # Design Decisions
//! - A failed body validation is handed to the handler, never answered here
//! - Handler errors are returned to the caller untouched; whoever calls
//!   dispatch owns the fallback response

use serde_json::Value;
use std::time::Instant;
use thiserror::Error;

use crate::http::handler::BoxError;
use crate::http::request::{Body, PathInfo, Request};
use crate::http::response::Response;
use crate::observability::metrics;
use crate::routing::{Method, RouteMatch, Router};

/// Failure raised while dispatching.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("handler for {method} {pattern} failed: {source}")]
    Handler {
        method: Method,
        pattern: String,
        #[source]
        source: BoxError,
    },
}

/// Route `path` and `method` and run the matching handler.
pub async fn dispatch(
    router: &Router,
    path: &str,
    method: Method,
    body: Option<Value>,
) -> Result<Response, DispatchError> {
    let start = Instant::now();

    let Some(RouteMatch { route, params }) = router.match_route(path, method) else {
        tracing::debug!(method = %method, path = %path, "No route matched");
        metrics::record_dispatch(method, Some(404), false, start);
        return Ok(Response::not_found());
    };

    let body = match route.body_schema() {
        Some(schema) => Body::Checked(schema.validate(body.as_ref())),
        None => Body::Raw(body),
    };
    if let Some(err) = body.validation().and_then(|v| v.error()) {
        tracing::debug!(pattern = %route.pattern(), error = %err, "Body failed validation");
    }

    tracing::debug!(
        method = %method,
        path = %path,
        pattern = %route.pattern(),
        params = params.len(),
        "Dispatching request"
    );

    let request = Request {
        path: PathInfo::from(route.pattern()),
        params,
        body,
    };

    match (route.handler())(request).await {
        Ok(response) => {
            metrics::record_dispatch(method, Some(response.status), true, start);
            Ok(response)
        }
        Err(source) => {
            metrics::record_dispatch(method, None, true, start);
            Err(DispatchError::Handler {
                method,
                pattern: route.pattern().raw().to_string(),
                source,
            })
        }
    }
}

impl Router {
    /// Shorthand for [`dispatch`] on this router.
    pub async fn dispatch(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<Response, DispatchError> {
        dispatch(self, path, method, body).await
    }
}
