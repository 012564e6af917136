//! API routes for regiond

use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use region_common::{HealthResponse, NodeCoordinates, RequestDescriptor};
use std::sync::Arc;

type AppStateArc = Arc<AppState>;

// ============================================================================
// Region Routes
// ============================================================================

pub fn region_routes() -> Router<AppStateArc> {
    Router::new().route(
        "/v1/regions/:identifier/:entity/:node",
        post(lookup_regions),
    )
}

/// Adapt the accessor's `(body, status)` pair into an HTTP response.
/// The body is JSON exactly when the status is 200.
async fn lookup_regions(
    State(state): State<AppStateArc>,
    Path((identifier, entity, node)): Path<(String, String, String)>,
    Json(request): Json<RequestDescriptor>,
) -> Response {
    let coords = NodeCoordinates::new(identifier, entity, node);
    let (body, status) = state.accessor.respond(&coords, &request);
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status == StatusCode::OK {
        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response()
    } else {
        (status, body).into_response()
    }
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
