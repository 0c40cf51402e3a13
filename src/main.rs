//! Static-Asset Gateway
//!
//! A thin request-routing layer in front of an object store, built with
//! Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//! client ──▶ route table ──▶ translator ──▶ object store ──▶ response shaper ──▶ client
//!            (two fixed       (segments      (GET-by-key,     (status band,
//!             GET routes)      → key)         delegated        CORS + metadata
//!                                             credential)      headers)
//! ```
//!
//! The gateway holds no per-request state beyond the in-flight store
//! call; the delegated credential and store client are process-wide,
//! immutable after startup.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use asset_gateway::config::{loader, GatewayConfig};
use asset_gateway::http::HttpServer;
use asset_gateway::lifecycle::Shutdown;
use asset_gateway::observability::{logging, metrics};

#[derive(Parser, Debug)]
#[command(name = "asset-gateway", version, about = "Static-asset gateway in front of an object store")]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => loader::load_config(path)?,
        None => GatewayConfig::default(),
    };

    logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        endpoint = %config.object_store.endpoint,
        bucket = %config.object_store.bucket,
        store_timeout_secs = config.timeouts.store_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
