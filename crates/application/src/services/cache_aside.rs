use crate::ports::CacheStore;
use relief_geocoder_domain::config::CacheConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// TTLs applied at each cache call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    /// Successful geocodes. Named places rarely move.
    pub geocode_ttl: Duration,
    /// Negative geocodes. Bounds how often a failing place hits providers.
    pub negative_ttl: Duration,
    /// Extraction results, including the "no location" sentinel.
    pub extraction_ttl: Duration,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            geocode_ttl: Duration::from_secs(24 * 60 * 60),
            negative_ttl: Duration::from_secs(60 * 60),
            extraction_ttl: Duration::from_secs(60 * 60),
        }
    }
}

impl From<&CacheConfig> for CachePolicy {
    fn from(cfg: &CacheConfig) -> Self {
        Self {
            geocode_ttl: Duration::from_secs(cfg.geocode_ttl_secs),
            negative_ttl: Duration::from_secs(cfg.negative_ttl_secs),
            extraction_ttl: Duration::from_secs(cfg.extraction_ttl_secs),
        }
    }
}

/// Typed get/set/delete over a [`CacheStore`].
///
/// The only entry point the resolver and extraction step use to reach the
/// store. A payload that no longer deserializes into the requested type is
/// treated as a miss.
pub struct CacheAside {
    store: Arc<dyn CacheStore>,
    policy: CachePolicy,
}

impl CacheAside {
    pub fn new(store: Arc<dyn CacheStore>, policy: CachePolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> &CachePolicy {
        &self.policy
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.store.get(key).await?;

        match serde_json::from_value(value) {
            Ok(typed) => {
                debug!(key, "Cache HIT");
                Some(typed)
            }
            Err(e) => {
                warn!(key, error = %e, "Discarding undecodable cache entry");
                None
            }
        }
    }

    pub async fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) {
        match serde_json::to_value(value) {
            Ok(json) => {
                self.store.set(key, json, ttl).await;
                debug!(key, ttl_secs = ttl.as_secs(), "Cache SET");
            }
            Err(e) => {
                warn!(key, error = %e, "Failed to encode cache value, skipping write");
            }
        }
    }

    pub async fn delete(&self, key: &str) {
        self.store.delete(key).await;
        debug!(key, "Cache DELETE");
    }
}
