use relief_geocoder_domain::validators::validate_location_name;
use relief_geocoder_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::services::cache_key;
use crate::services::CacheAside;

/// Drops the cached geocode for a location so the next lookup goes back to
/// the providers.
pub struct InvalidateLocationUseCase {
    cache: Arc<CacheAside>,
}

impl InvalidateLocationUseCase {
    pub fn new(cache: Arc<CacheAside>) -> Self {
        Self { cache }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, location_name: &str) -> Result<String, DomainError> {
        validate_location_name(location_name)?;

        let key = cache_key::geocode_key(location_name);
        self.cache.delete(&key).await;

        info!(location = %location_name, "Cached geocode invalidated");
        Ok(key)
    }
}
