//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Router build and dispatch produce:
//!     → tracing events (structured fields: method, path, pattern)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → logging.rs subscriber (stdout)
//!     → Prometheus scrape endpoint
//! ```

pub mod logging;
pub mod metrics;
