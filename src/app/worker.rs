use std::sync::Arc;

use tokio::time::Instant;
use tracing::debug;

use crate::http::{Outcome, Transport};
use crate::metrics::StatsRecorder;

/// Run one worker's share of the request budget sequentially.
///
/// Each iteration counts the attempt before the transport is invoked,
/// classifies the outcome, and folds the observed latency into the shared
/// recorder. A construction failure abandons the worker's remaining
/// iterations without surfacing an error to the dispatcher; the retracted
/// attempt leaves no trace in the counters.
pub async fn run_worker(
    iterations: u64,
    transport: Arc<dyn Transport>,
    stats: Arc<StatsRecorder>,
) {
    for _ in 0..iterations {
        let start = Instant::now();
        stats.start_attempt();

        match transport.call().await {
            Outcome::BuildFailed => {
                stats.retract_attempt();
                debug!("request construction failed; worker abandoning its remaining share");
                return;
            }
            outcome => stats.record(outcome, start.elapsed()),
        }
    }
}
