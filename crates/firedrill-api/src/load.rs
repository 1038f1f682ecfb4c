//! CPU burn engine backing the load endpoint.
//!
//! Saturates every available processing unit with square-root batches
//! until a deadline passes, then reports actual elapsed time. This is
//! coarse saturation, not precise timing: the deadline is only checked
//! between batches, so a run can overshoot by up to one batch.

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::error::{ApiError, ApiResult};

/// Square-root evaluations per inner batch.
const BATCH_ITERATIONS: u64 = 1_000_000;

/// Outcome of a completed burn.
#[derive(Debug, Clone, Copy)]
pub struct LoadReport {
    /// Wall-clock time from fan-out to last worker completion.
    pub elapsed: Duration,
    /// Number of workers spawned (one per processing unit).
    pub workers: usize,
}

/// Number of processing units available for parallel work.
pub fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Saturate all processing units for `duration`, suspending until every
/// worker has passed its deadline.
///
/// Workers run on the blocking thread pool so the async runtime stays
/// responsive to other requests. There is no cancellation: once spawned,
/// each worker runs to the deadline even if the client disconnects.
pub async fn burn(duration: Duration) -> ApiResult<LoadReport> {
    let workers = available_workers();
    let start = Instant::now();
    let deadline = start + duration;

    let handles: Vec<_> = (0..workers)
        .map(|_| tokio::task::spawn_blocking(move || busy_until(deadline)))
        .collect();

    for handle in handles {
        handle
            .await
            .map_err(|e| ApiError::Internal(format!("load worker failed: {e}")))?;
    }

    Ok(LoadReport {
        elapsed: start.elapsed(),
        workers,
    })
}

/// Run square-root batches until `deadline` passes.
fn busy_until(deadline: Instant) {
    while Instant::now() < deadline {
        let mut acc = 0.0_f64;
        for i in 0..BATCH_ITERATIONS {
            acc += black_box(i as f64).sqrt();
        }
        black_box(acc);
    }
}
