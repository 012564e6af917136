//! HTTP server for regiond

use crate::regions::RegionDataAccessor;
use crate::routes;
use anyhow::Result;
use axum::Router;
use region_common::DaemonConfig;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub accessor: RegionDataAccessor,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(accessor: RegionDataAccessor) -> Self {
        Self {
            accessor,
            start_time: Instant::now(),
        }
    }
}

/// Run the HTTP server
pub async fn run(config: &DaemonConfig) -> Result<()> {
    let accessor = RegionDataAccessor::new(config.storage_root.clone());
    info!("Serving region telemetry from {}", accessor.storage_root().display());
    let state = Arc::new(AppState::new(accessor));

    let app = Router::new()
        .merge(routes::region_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("  Listening on http://{}", config.listen_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
