//! segment-router demo server.
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server (Axum, request id, trace, timeout)
//!                         │
//!                         ▼
//!                     http::dispatch ──▶ routing::Router (first match wins)
//!                         │
//!                         ▼
//!                     schema (optional body validation)
//!                         │
//!                         ▼
//!     ◀────────────── handler → Response
//! ```

use clap::Parser;
use std::path::PathBuf;

use segment_router::config::{load_config, ServerConfig};
use segment_router::http::server::{bind, shutdown_signal};
use segment_router::http::HttpServer;
use segment_router::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "segment-router")]
#[command(about = "Serve the sample routes over HTTP", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.limits.max_body_size,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = bind(&config.listener).await?;
    let server = HttpServer::new(config, segment_router::demo::router());
    server.run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
