use relief_geocoder_jobs::{CacheSweepJob, JobRunner};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::di::UseCases;

/// Run the cache sweep job until Ctrl-C.
pub async fn run(use_cases: &UseCases, sweep_interval_secs: u64) -> anyhow::Result<()> {
    let shutdown = CancellationToken::new();

    JobRunner::new()
        .with_cache_sweep(
            CacheSweepJob::new(use_cases.sweep.clone())
                .with_interval(sweep_interval_secs)
                .with_cancellation(shutdown.clone()),
        )
        .start()
        .await;

    info!("Press Ctrl+C to stop");
    tokio::signal::ctrl_c().await?;

    info!("Shutting down");
    shutdown.cancel();
    Ok(())
}
