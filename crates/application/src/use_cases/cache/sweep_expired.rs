use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::CacheStore;

/// Deletes every entry whose expiry has passed.
///
/// Reads already evict lazily, so this only reclaims space held by keys
/// nobody asks for again.
pub struct SweepExpiredCacheUseCase {
    store: Arc<dyn CacheStore>,
}

impl SweepExpiredCacheUseCase {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> u64 {
        let deleted = self.store.sweep_expired().await;
        debug!(deleted, backend = self.store.backend_name(), "Expired cache entries swept");
        deleted
    }
}
