//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_dispatch_total` (counter): dispatches by method, status, matched
//! - `router_dispatch_duration_seconds` (histogram): time from lookup to
//!   handler completion
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade and is a no-op until a
//!   recorder is installed
//! - `status` is `error` when the handler failed

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

use crate::routing::Method;

/// Install the Prometheus recorder and its scrape endpoint on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one dispatch. `status` is `None` when the handler returned an error.
pub fn record_dispatch(method: Method, status: Option<u16>, matched: bool, start: Instant) {
    let status = status.map_or_else(|| "error".to_string(), |s| s.to_string());
    let matched = if matched { "true" } else { "false" };

    ::metrics::counter!(
        "router_dispatch_total",
        "method" => method.as_str(),
        "status" => status,
        "matched" => matched
    )
    .increment(1);

    ::metrics::histogram!(
        "router_dispatch_duration_seconds",
        "method" => method.as_str()
    )
    .record(start.elapsed().as_secs_f64());
}
