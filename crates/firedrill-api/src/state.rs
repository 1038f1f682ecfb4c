//! Shared application state for the Axum server.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::shutdown::{MockTerminator, ProcessTerminator, Terminator};

/// Shared application state, cloned into each handler.
#[derive(Clone)]
pub struct AppState {
    /// Delay between the `/down` acknowledgment and process exit.
    pub crash_delay: Duration,
    /// Process-exit seam (mocked in tests).
    pub terminator: Arc<dyn Terminator>,
}

impl AppState {
    /// Production state derived from config.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            crash_delay: Duration::from_secs(config.crash_delay_secs),
            terminator: Arc::new(ProcessTerminator),
        }
    }

    /// State with a mock terminator and a short crash delay (tests).
    /// Returns the mock so callers can assert on recorded exit codes.
    pub fn with_mock_terminator(crash_delay: Duration) -> (Self, Arc<MockTerminator>) {
        let terminator = Arc::new(MockTerminator::new());
        let state = Self {
            crash_delay,
            terminator: terminator.clone(),
        };
        (state, terminator)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&ApiConfig::default())
    }
}
