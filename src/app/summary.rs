use std::time::Duration;

use crate::metrics::StatsSnapshot;

/// Milliseconds per second, for integer RPS math.
const MS_PER_SEC: u64 = 1_000;
/// Fraction scale for formatted runtimes.
const FRACTION_SCALE: u128 = 1_000;

/// Render a statistics snapshot as the final (or partial) report.
///
/// Requests per second is integer math over elapsed milliseconds; when
/// the runtime rounds to zero it reports 0 rather than dividing by zero.
#[must_use]
pub fn summary_lines(
    snapshot: &StatsSnapshot,
    concurrency: u64,
    elapsed: Duration,
) -> Vec<String> {
    let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    let rps = snapshot
        .total
        .saturating_mul(MS_PER_SEC)
        .checked_div(elapsed_ms)
        .unwrap_or(0);

    vec![
        format!("Runtime: {}", format_runtime(elapsed)),
        format!("Concurrency: {}", concurrency),
        format!("Requests per second: {}", rps),
        format!("Total Requests: {}", snapshot.total),
        format!("Successful: {}", snapshot.success),
        format!("Failed: {}", snapshot.fail),
        format!("Timeouts: {}", snapshot.timeout),
        format!("Min Latency: {}ms", snapshot.min_latency.as_millis()),
        format!("Avg Latency: {}ms", snapshot.avg_latency.as_millis()),
        format!("Max Latency: {}ms", snapshot.max_latency.as_millis()),
    ]
}

fn format_runtime(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let millis = elapsed
        .as_millis()
        .checked_rem(FRACTION_SCALE)
        .unwrap_or(0);
    format!("{}.{:03}s", secs, millis)
}
