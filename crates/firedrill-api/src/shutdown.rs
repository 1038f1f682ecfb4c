//! Process termination seam for the crash endpoint.
//!
//! The crash handler ends the whole process, which a test binary cannot
//! survive. Handlers therefore exit through a `Terminator` trait object
//! held in `AppState`; tests swap in `MockTerminator` and assert on the
//! recorded exit codes instead.

use std::sync::Mutex;

/// Terminates the current process.
pub trait Terminator: Send + Sync {
    /// Exit with `code`. The production impl does not return.
    fn exit(&self, code: i32);
}

/// Production terminator backed by `std::process::exit`.
#[derive(Debug, Default)]
pub struct ProcessTerminator;

impl Terminator for ProcessTerminator {
    fn exit(&self, code: i32) {
        tracing::error!(code, "terminating process");
        std::process::exit(code);
    }
}

/// Records exit calls instead of terminating (tests).
#[derive(Debug, Default)]
pub struct MockTerminator {
    calls: Mutex<Vec<i32>>,
}

impl MockTerminator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit codes recorded so far, in call order.
    pub fn calls(&self) -> Vec<i32> {
        self.calls.lock().unwrap().clone()
    }
}

impl Terminator for MockTerminator {
    fn exit(&self, code: i32) {
        self.calls.lock().unwrap().push(code);
    }
}
