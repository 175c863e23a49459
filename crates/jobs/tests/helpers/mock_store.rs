#![allow(dead_code)]

use async_trait::async_trait;
use relief_geocoder_application::ports::CacheStore;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Store whose sweep reports a fixed number of deletions and counts calls.
pub struct SweepCountingStore {
    per_sweep: u64,
    sweeps: Arc<AtomicU64>,
}

impl SweepCountingStore {
    pub fn new(per_sweep: u64) -> Self {
        Self {
            per_sweep,
            sweeps: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn sweep_count(&self) -> u64 {
        self.sweeps.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheStore for SweepCountingStore {
    async fn get(&self, _key: &str) -> Option<Value> {
        None
    }

    async fn set(&self, _key: &str, _value: Value, _ttl: Duration) {}

    async fn delete(&self, _key: &str) {}

    async fn sweep_expired(&self) -> u64 {
        self.sweeps.fetch_add(1, Ordering::SeqCst);
        self.per_sweep
    }

    fn backend_name(&self) -> &'static str {
        "counting"
    }
}
