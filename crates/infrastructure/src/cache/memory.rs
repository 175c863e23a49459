use async_trait::async_trait;
use dashmap::DashMap;
use relief_geocoder_application::ports::{CacheStore, Clock, SystemClock};
use relief_geocoder_domain::CacheEntry;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Process-local expiring store. Contents are lost on restart.
pub struct MemoryCacheStore {
    entries: Arc<DashMap<String, CacheEntry>>,
    clock: Arc<dyn Clock>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> Option<serde_json::Value> {
        let now = self.clock.now();

        match self.entries.get(key) {
            Some(entry) if !entry.is_expired_at(now) => return Some(entry.value.clone()),
            Some(_) => {}
            None => return None,
        }

        // Shard guard is released above; only drop the entry if it is still stale
        if self
            .entries
            .remove_if(key, |_, entry| entry.is_expired_at(now))
            .is_some()
        {
            debug!(key, "Lazy eviction of expired entry");
        }
        None
    }

    async fn set(&self, key: &str, value: serde_json::Value, ttl: Duration) {
        let entry = CacheEntry::new(key.to_string(), value, self.clock.now(), ttl);
        self.entries.insert(key.to_string(), entry);
    }

    async fn delete(&self, key: &str) {
        self.entries.remove(key);
    }

    async fn sweep_expired(&self) -> u64 {
        let now = self.clock.now();
        let mut removed = 0u64;

        self.entries.retain(|_, entry| {
            if entry.is_expired_at(now) {
                removed += 1;
                false
            } else {
                true
            }
        });

        removed
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
