//! Shared test harness for end-to-end tests.
//!
//! Drives the real router through `tower::ServiceExt::oneshot` with a
//! mock process-exit seam, so crash-path tests observe the exit code
//! instead of dying with the service.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use firedrill_api::routes::build_router;
use firedrill_api::shutdown::MockTerminator;
use firedrill_api::state::AppState;

/// End-to-end harness: real router, mock process exit.
pub struct TestHarness {
    pub router: Router,
    pub terminator: Arc<MockTerminator>,
}

#[allow(dead_code)]
impl TestHarness {
    /// Harness with a short crash delay so tests stay fast.
    pub fn new() -> Self {
        Self::with_crash_delay(Duration::from_millis(20))
    }

    pub fn with_crash_delay(crash_delay: Duration) -> Self {
        let (state, terminator) = AppState::with_mock_terminator(crash_delay);
        Self {
            router: build_router(state),
            terminator,
        }
    }

    /// GET `path`, returning (status, raw body bytes).
    pub async fn get_raw(&self, path: &str) -> (StatusCode, Vec<u8>) {
        let response = self
            .router
            .clone()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    /// GET `path`, returning (status, parsed JSON body).
    pub async fn get(&self, path: &str) -> (StatusCode, serde_json::Value) {
        let (status, bytes) = self.get_raw(path).await;
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }
}
