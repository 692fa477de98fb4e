use std::sync::Arc;
use std::time::Instant;

use tokio::sync::broadcast;

use crate::app::summary_lines;
use crate::metrics::StatsRecorder;
use crate::shutdown::{ShutdownReceiver, ShutdownSender};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

/// Broadcast channel size for shutdown notifications (single signal fan-out).
const SHUTDOWN_CHANNEL_CAPACITY: usize = 1;
/// Exit status after an operator interrupt.
const INTERRUPT_EXIT_CODE: i32 = 1;

#[must_use]
pub fn shutdown_channel() -> (ShutdownSender, ShutdownReceiver) {
    broadcast::channel::<()>(SHUTDOWN_CHANNEL_CAPACITY)
}

/// Watch for an operator interrupt. On ctrl_c (or SIGTERM on unix) the
/// watcher prints a best-effort partial report from whatever the recorder
/// holds at that instant and terminates the process with a non-zero
/// status; in-flight requests are abandoned. A shutdown broadcast from
/// the normal completion path ends the watcher quietly.
pub fn setup_signal_report_handler(
    shutdown_tx: &ShutdownSender,
    stats: &Arc<StatsRecorder>,
    concurrency: u64,
    launched_at: Instant,
) -> tokio::task::JoinHandle<()> {
    let shutdown_tx = shutdown_tx.clone();
    let stats = Arc::clone(stats);

    tokio::spawn(async move {
        let mut shutdown_rx = shutdown_tx.subscribe();
        let interrupted = wait_for_interrupt(&mut shutdown_rx).await;

        if interrupted {
            report_and_exit(&stats, concurrency, launched_at);
        }
    })
}

async fn wait_for_interrupt(shutdown_rx: &mut ShutdownReceiver) -> bool {
    #[cfg(unix)]
    {
        let mut term_signal = match signal(SignalKind::terminate()) {
            Ok(term_signal) => Some(term_signal),
            Err(err) => {
                eprintln!("Failed to register SIGTERM handler: {}", err);
                None
            }
        };

        tokio::select! {
            _ = shutdown_rx.recv() => false,
            _ = tokio::signal::ctrl_c() => true,
            () = async {
                if let Some(term_signal) = term_signal.as_mut() {
                    term_signal.recv().await;
                } else {
                    std::future::pending::<()>().await;
                }
            } => true,
        }
    }

    #[cfg(not(unix))]
    {
        tokio::select! {
            _ = shutdown_rx.recv() => false,
            _ = tokio::signal::ctrl_c() => true,
        }
    }
}

fn report_and_exit(stats: &Arc<StatsRecorder>, concurrency: u64, launched_at: Instant) -> ! {
    let snapshot = stats.snapshot();
    for line in summary_lines(&snapshot, concurrency, launched_at.elapsed()) {
        println!("{}", line);
    }
    std::process::exit(INTERRUPT_EXIT_CODE);
}
