use relief_geocoder_application::use_cases::SweepExpiredCacheUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodically reclaims expired cache entries that are never read again.
pub struct CacheSweepJob {
    sweep: Arc<SweepExpiredCacheUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheSweepJob {
    pub fn new(sweep: Arc<SweepExpiredCacheUseCase>) -> Self {
        Self {
            sweep,
            interval_secs: 300,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting cache sweep job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheSweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let deleted = self.sweep.execute().await;
                        if deleted > 0 {
                            info!(deleted, "Cache sweep completed");
                        } else {
                            debug!("Cache sweep found nothing to delete");
                        }
                    }
                }
            }
        });
    }
}
