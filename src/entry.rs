use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use tracing::{debug, error};

use crate::app::{run_bench, summary_lines};
use crate::args::{BenchArgs, BenchConfig};
use crate::error::AppResult;
use crate::http::{HttpTransport, Transport, Workload};
use crate::metrics::StatsRecorder;
use crate::shutdown_handlers::{setup_signal_report_handler, shutdown_channel};

pub(crate) fn run() -> AppResult<()> {
    let args = BenchArgs::parse();
    crate::logger::init_logging(args.verbose);

    let config = match BenchConfig::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return Err(err);
        }
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(&config))
}

async fn run_async(config: &BenchConfig) -> AppResult<()> {
    let workload = Workload::from_config(config)?;
    debug!(
        url = %workload.url(),
        method = workload.method().as_str(),
        has_body = workload.body().is_some(),
        "prepared request template"
    );
    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(config, &workload)?);
    let stats = Arc::new(StatsRecorder::new());

    let launched_at = Instant::now();
    let (shutdown_tx, _shutdown_rx) = shutdown_channel();
    let signal_task = setup_signal_report_handler(
        &shutdown_tx,
        &stats,
        config.concurrency.get(),
        launched_at,
    );

    run_bench(config, transport, Arc::clone(&stats)).await?;

    // Normal completion: stand the watcher down before reading the stats.
    drop(shutdown_tx.send(()));
    drop(signal_task.await);

    let snapshot = stats.snapshot();
    for line in summary_lines(&snapshot, config.concurrency.get(), launched_at.elapsed()) {
        println!("{}", line);
    }
    Ok(())
}
