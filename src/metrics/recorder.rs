use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::http::Outcome;

/// Sentinel for "no latency observed yet".
const LATENCY_UNSET: u64 = u64::MAX;
/// Largest recordable latency in nanoseconds, kept below the sentinel.
const LATENCY_CAP_NANOS: u64 = u64::MAX - 1;

/// Shared run statistics, mutated concurrently by every worker.
///
/// Every field is an atomic and every update is a single RMW op, so the
/// recorder never blocks a worker and a snapshot taken from another
/// thread mid-run is well-defined. Min and max live in separate fields;
/// two attempts finishing at the same instant may interleave their
/// extremum updates, which can only widen the window, never tear it.
#[derive(Debug)]
pub struct StatsRecorder {
    total: AtomicU64,
    success: AtomicU64,
    fail: AtomicU64,
    timeout: AtomicU64,
    min_nanos: AtomicU64,
    max_nanos: AtomicU64,
    sum_nanos: AtomicU64,
}

/// Plain snapshot of the recorder, read once at report time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub total: u64,
    pub success: u64,
    pub fail: u64,
    pub timeout: u64,
    /// Zero until the first attempt completes.
    pub min_latency: Duration,
    pub max_latency: Duration,
    /// Exact running average over all completed attempts, not the
    /// min/max midpoint.
    pub avg_latency: Duration,
}

impl StatsRecorder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: AtomicU64::new(0),
            success: AtomicU64::new(0),
            fail: AtomicU64::new(0),
            timeout: AtomicU64::new(0),
            min_nanos: AtomicU64::new(LATENCY_UNSET),
            max_nanos: AtomicU64::new(0),
            sum_nanos: AtomicU64::new(0),
        }
    }

    /// Count one attempt as started, before the transport is invoked.
    pub fn start_attempt(&self) {
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    /// Undo `start_attempt` for an attempt that never reached the wire
    /// (request construction failed). Keeps `total = success + fail`
    /// exact for completed runs.
    pub fn retract_attempt(&self) {
        self.total.fetch_sub(1, Ordering::Relaxed);
    }

    /// Classify one completed attempt and fold its latency in.
    pub fn record(&self, outcome: Outcome, latency: Duration) {
        if outcome.is_success() {
            self.success.fetch_add(1, Ordering::Relaxed);
        } else {
            self.fail.fetch_add(1, Ordering::Relaxed);
            if outcome.is_timeout() {
                self.timeout.fetch_add(1, Ordering::Relaxed);
            }
        }

        let nanos = u64::try_from(latency.as_nanos())
            .unwrap_or(LATENCY_CAP_NANOS)
            .min(LATENCY_CAP_NANOS);
        self.min_nanos.fetch_min(nanos, Ordering::Relaxed);
        self.max_nanos.fetch_max(nanos, Ordering::Relaxed);
        self.sum_nanos.fetch_add(nanos, Ordering::Relaxed);
    }

    /// Read the current aggregate. Safe to call from any thread at any
    /// instant; mid-run reads are best-effort but never torn per field.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        let total = self.total.load(Ordering::Relaxed);
        let success = self.success.load(Ordering::Relaxed);
        let fail = self.fail.load(Ordering::Relaxed);
        let timeout = self.timeout.load(Ordering::Relaxed);
        let min_nanos = self.min_nanos.load(Ordering::Relaxed);
        let max_nanos = self.max_nanos.load(Ordering::Relaxed);
        let sum_nanos = self.sum_nanos.load(Ordering::Relaxed);

        let completed = success.saturating_add(fail);
        let avg_nanos = sum_nanos.checked_div(completed).unwrap_or(0);
        let min_latency = if min_nanos == LATENCY_UNSET {
            Duration::ZERO
        } else {
            Duration::from_nanos(min_nanos)
        };

        StatsSnapshot {
            total,
            success,
            fail,
            timeout,
            min_latency,
            max_latency: Duration::from_nanos(max_nanos),
            avg_latency: Duration::from_nanos(avg_nanos),
        }
    }
}

impl Default for StatsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
