use relief_geocoder_domain::validators::validate_location_name;
use relief_geocoder_domain::{DomainError, GeocodeResult};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::ports::GeocodingProvider;
use crate::services::cache_key;
use crate::services::CacheAside;

/// A geocode result plus how it was obtained.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    #[serde(flatten)]
    pub result: GeocodeResult,
    pub cache_key: String,
    pub cache_hit: bool,
}

/// Fallback resolver: cache first, then each provider in priority order.
///
/// The first provider returning at least one match wins outright. When all
/// are exhausted a negative result is cached at the short TTL, so a failing
/// place is retried only after that window.
pub struct ResolveLocationUseCase {
    cache: Arc<CacheAside>,
    providers: Vec<Arc<dyn GeocodingProvider>>,
    provider_timeout: Duration,
}

impl ResolveLocationUseCase {
    pub fn new(
        cache: Arc<CacheAside>,
        providers: Vec<Arc<dyn GeocodingProvider>>,
        provider_timeout: Duration,
    ) -> Self {
        Self {
            cache,
            providers,
            provider_timeout,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, location_name: &str) -> Result<Resolution, DomainError> {
        validate_location_name(location_name)?;

        let key = cache_key::geocode_key(location_name);

        if let Some(cached) = self.cache.get::<GeocodeResult>(&key).await {
            debug!(
                location = %location_name,
                provider = %cached.provider,
                resolved = cached.is_resolved(),
                "Geocode cache HIT"
            );
            return Ok(Resolution {
                result: cached,
                cache_key: key,
                cache_hit: true,
            });
        }

        debug!(location = %location_name, "Geocode cache MISS");

        let result = match self.try_providers(location_name).await {
            Some(result) => {
                self.cache
                    .set(&key, &result, self.cache.policy().geocode_ttl)
                    .await;
                info!(
                    location = %location_name,
                    provider = %result.provider,
                    confidence = %result.confidence,
                    "Location resolved"
                );
                result
            }
            None => {
                let result = GeocodeResult::unresolved(location_name);
                self.cache
                    .set(&key, &result, self.cache.policy().negative_ttl)
                    .await;
                warn!(
                    location = %location_name,
                    "All geocoding providers exhausted, caching negative result"
                );
                result
            }
        };

        Ok(Resolution {
            result,
            cache_key: key,
            cache_hit: false,
        })
    }

    async fn try_providers(&self, location_name: &str) -> Option<GeocodeResult> {
        for provider in &self.providers {
            let id = provider.id();

            if !provider.is_enabled() {
                debug!(provider = %id, "Provider not configured, skipping");
                continue;
            }

            let attempt =
                tokio::time::timeout(self.provider_timeout, provider.attempt(location_name))
                    .await
                    .unwrap_or_else(|_| Err(DomainError::ProviderTimeout(id.to_string())));

            match attempt {
                Ok(matches) => match matches.into_iter().next() {
                    Some(first) => return Some(GeocodeResult::from_match(id, first)),
                    None => {
                        debug!(provider = %id, location = %location_name, "No matches");
                    }
                },
                Err(e) => {
                    warn!(
                        provider = %id,
                        error = %e,
                        timeout_ms = self.provider_timeout.as_millis() as u64,
                        "Geocoding provider failed"
                    );
                }
            }
        }

        None
    }
}
