use std::sync::Arc;

use tracing::debug;

use crate::args::BenchConfig;
use crate::error::AppResult;
use crate::http::Transport;
use crate::metrics::StatsRecorder;

use super::worker::run_worker;

/// Launch the configured number of workers over a static partition of the
/// request budget and block until every worker has finished.
///
/// The partition is `requests / concurrency` per worker; a remainder is
/// dropped, so exactly `concurrency * (requests / concurrency)` attempts
/// happen. Cancellation is not observed here; the caller's signal watcher
/// reads the shared recorder directly.
///
/// # Errors
///
/// Returns an error if a worker task is cancelled or panics.
pub async fn run_bench(
    config: &BenchConfig,
    transport: Arc<dyn Transport>,
    stats: Arc<StatsRecorder>,
) -> AppResult<()> {
    let concurrency = config.concurrency.get();
    let per_worker = config.per_worker_requests();
    debug!(
        concurrency,
        per_worker, "dispatching workers over static partition"
    );

    let capacity = usize::try_from(concurrency).unwrap_or(usize::MAX);
    let mut handles = Vec::with_capacity(capacity);
    for _ in 0..concurrency {
        let transport = Arc::clone(&transport);
        let stats = Arc::clone(&stats);
        handles.push(tokio::spawn(run_worker(per_worker, transport, stats)));
    }

    // Join barrier: no partial return on the success path.
    for handle in handles {
        handle.await?;
    }
    Ok(())
}
