//! CPU load endpoint.

use std::time::Duration;

use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::load;

/// Upper bound on a single load run, in milliseconds.
const MAX_DURATION_MS: u64 = 60_000;

/// Report returned after a completed load run.
#[derive(Debug, Serialize)]
pub struct LoadResponse {
    pub status: &'static str,
    pub duration_ms: u64,
    pub cpu_cores_used: usize,
    pub message: &'static str,
}

/// GET /load/{duration} — saturate all processing units for `duration`
/// milliseconds, then report actual elapsed time and worker count.
pub async fn run_load(Path(duration): Path<String>) -> ApiResult<Json<LoadResponse>> {
    let requested_ms = parse_duration_ms(&duration)?;

    tracing::info!(requested_ms, "load test started");

    let report = load::burn(Duration::from_millis(requested_ms)).await?;
    let duration_ms = report.elapsed.as_millis() as u64;

    tracing::info!(duration_ms, workers = report.workers, "load test completed");

    Ok(Json(LoadResponse {
        status: "completed",
        duration_ms,
        cpu_cores_used: report.workers,
        message: "CPU load test completed successfully",
    }))
}

/// A valid duration is a positive integer count of milliseconds, at most
/// one minute. Anything else (including negatives, which fail the u64
/// parse) is rejected before any work starts.
fn parse_duration_ms(raw: &str) -> ApiResult<u64> {
    match raw.parse::<u64>() {
        Ok(ms) if (1..=MAX_DURATION_MS).contains(&ms) => Ok(ms),
        _ => Err(ApiError::BadRequest(
            "invalid duration: use /load/{milliseconds} (1-60000)".to_string(),
        )),
    }
}
