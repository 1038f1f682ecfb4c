//! Health check endpoint.

use axum::Json;
use serde::Serialize;

/// Constant health payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health — liveness check.
pub async fn health() -> Json<HealthResponse> {
    tracing::debug!("health check request received");
    Json(HealthResponse { status: "ok" })
}
