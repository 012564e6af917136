//! Region Daemon - read-only HTTP access to captured GPU region telemetry
//!
//! Serves per-node region documents out of the on-disk telemetry tree
//! written by the capture pipeline.

use anyhow::Result;
use region_common::DaemonConfig;
use regiond::server;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DaemonConfig::load();
    info!("regiond v{} starting", env!("CARGO_PKG_VERSION"));
    info!("Storage root: {}", config.storage_root.display());

    server::run(&config).await
}
