use relief_geocoder_application::ports::CacheStore;
use relief_geocoder_domain::config::CacheBackend;
use relief_geocoder_domain::Config;
use relief_geocoder_infrastructure::cache::MemoryCacheStore;
use relief_geocoder_infrastructure::repositories::SqliteCacheStore;
use std::sync::Arc;
use tracing::info;

use crate::bootstrap::init_database;

pub async fn build_store(config: &Config) -> anyhow::Result<Arc<dyn CacheStore>> {
    let store: Arc<dyn CacheStore> = match config.cache.backend {
        CacheBackend::Sqlite => {
            let pool = init_database(&config.database).await?;
            Arc::new(SqliteCacheStore::new(pool))
        }
        CacheBackend::Memory => Arc::new(MemoryCacheStore::new()),
    };

    info!(backend = store.backend_name(), "Cache store ready");
    Ok(store)
}
