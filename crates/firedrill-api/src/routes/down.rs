//! Crash endpoint — simulates service failure for external monitoring tests.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Acknowledgment sent before the process exits.
#[derive(Debug, Serialize)]
pub struct CrashResponse {
    pub status: &'static str,
    pub message: String,
}

/// GET /down — acknowledge immediately, then exit the whole process with
/// status 1 after the configured delay.
///
/// The delay gives the response a window to flush before the process
/// dies. That is a timing assumption, not a guarantee: nothing
/// synchronizes the detached exit task with the response write.
pub async fn crash(State(state): State<AppState>) -> Json<CrashResponse> {
    let delay = state.crash_delay;
    tracing::warn!(
        delay_ms = delay.as_millis() as u64,
        "crash request received, service will exit"
    );

    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        state.terminator.exit(1);
    });

    Json(CrashResponse {
        status: "crashing",
        message: format!(
            "service will exit in {} seconds, simulating failure",
            delay.as_secs()
        ),
    })
}
