#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use relief_geocoder_application::ports::{
    CacheStore, Clock, GeocodingProvider, LanguageModel, ManualClock,
};
use relief_geocoder_domain::{DomainError, GeocodeMatch, ProviderId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock CacheStore
// ============================================================================

pub struct MockCacheStore {
    entries: Arc<RwLock<HashMap<String, (serde_json::Value, DateTime<Utc>)>>>,
    clock: Arc<ManualClock>,
    unavailable: AtomicBool,
    get_count: AtomicU64,
    set_count: AtomicU64,
    last_ttl: Arc<RwLock<HashMap<String, Duration>>>,
}

impl MockCacheStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(ManualClock::default()))
    }

    pub fn with_clock(clock: Arc<ManualClock>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            clock,
            unavailable: AtomicBool::new(false),
            get_count: AtomicU64::new(0),
            set_count: AtomicU64::new(0),
            last_ttl: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn clock(&self) -> &Arc<ManualClock> {
        &self.clock
    }

    /// Simulate a broken storage medium: reads miss, writes are dropped.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }

    pub fn get_count(&self) -> u64 {
        self.get_count.load(Ordering::Relaxed)
    }

    pub fn set_count(&self) -> u64 {
        self.set_count.load(Ordering::Relaxed)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }

    pub async fn ttl_for(&self, key: &str) -> Option<Duration> {
        self.last_ttl.read().await.get(key).copied()
    }

    pub async fn raw(&self, key: &str) -> Option<serde_json::Value> {
        self.entries.read().await.get(key).map(|(v, _)| v.clone())
    }

    pub async fn insert_raw(&self, key: &str, value: serde_json::Value, ttl: Duration) {
        let expires_at = self.clock.now() + chrono::Duration::from_std(ttl).unwrap();
        self.entries
            .write()
            .await
            .insert(key.to_string(), (value, expires_at));
    }
}

#[async_trait]
impl CacheStore for MockCacheStore {
    async fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.get_count.fetch_add(1, Ordering::Relaxed);
        if self.unavailable.load(Ordering::Relaxed) {
            return None;
        }

        let now = self.clock.now();
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some((_, expires_at)) if now >= *expires_at => {
                entries.remove(key);
                None
            }
            Some((value, _)) => Some(value.clone()),
            None => None,
        }
    }

    async fn set(&self, key: &str, value: serde_json::Value, ttl: Duration) {
        self.set_count.fetch_add(1, Ordering::Relaxed);
        if self.unavailable.load(Ordering::Relaxed) {
            return;
        }
        self.insert_raw(key, value, ttl).await;
        self.last_ttl.write().await.insert(key.to_string(), ttl);
    }

    async fn delete(&self, key: &str) {
        if self.unavailable.load(Ordering::Relaxed) {
            return;
        }
        self.entries.write().await.remove(key);
    }

    async fn sweep_expired(&self) -> u64 {
        if self.unavailable.load(Ordering::Relaxed) {
            return 0;
        }
        let now = self.clock.now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, (_, expires_at)| now < *expires_at);
        (before - entries.len()) as u64
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}

// ============================================================================
// Mock GeocodingProvider
// ============================================================================

pub struct MockGeocodingProvider {
    id: ProviderId,
    enabled: bool,
    matches: Arc<RwLock<Vec<GeocodeMatch>>>,
    should_fail: AtomicBool,
    delay: Option<Duration>,
    call_count: AtomicU64,
    last_input: Arc<RwLock<Option<String>>>,
}

impl MockGeocodingProvider {
    pub fn new(id: &str) -> Self {
        Self {
            id: ProviderId::new(id),
            enabled: true,
            matches: Arc::new(RwLock::new(Vec::new())),
            should_fail: AtomicBool::new(false),
            delay: None,
            call_count: AtomicU64::new(0),
            last_input: Arc::new(RwLock::new(None)),
        }
    }

    pub fn returning(id: &str, matches: Vec<GeocodeMatch>) -> Self {
        Self {
            matches: Arc::new(RwLock::new(matches)),
            ..Self::new(id)
        }
    }

    pub fn failing(id: &str) -> Self {
        let provider = Self::new(id);
        provider.should_fail.store(true, Ordering::Relaxed);
        provider
    }

    pub fn disabled(id: &str) -> Self {
        Self {
            enabled: false,
            ..Self::new(id)
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }

    pub async fn set_matches(&self, matches: Vec<GeocodeMatch>) {
        *self.matches.write().await = matches;
    }

    pub async fn last_input(&self) -> Option<String> {
        self.last_input.read().await.clone()
    }
}

#[async_trait]
impl GeocodingProvider for MockGeocodingProvider {
    fn id(&self) -> ProviderId {
        self.id.clone()
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn attempt(&self, location_name: &str) -> Result<Vec<GeocodeMatch>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_input.write().await = Some(location_name.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::ProviderUnavailable {
                provider: self.id.to_string(),
                reason: "connection refused".to_string(),
            });
        }

        Ok(self.matches.read().await.clone())
    }
}

// ============================================================================
// Mock LanguageModel
// ============================================================================

pub struct MockLanguageModel {
    enabled: bool,
    reply: Arc<RwLock<String>>,
    should_fail: AtomicBool,
    call_count: AtomicU64,
    last_prompt: Arc<RwLock<Option<String>>>,
    delay: Option<Duration>,
}

impl MockLanguageModel {
    pub fn replying(reply: &str) -> Self {
        Self {
            enabled: true,
            reply: Arc::new(RwLock::new(reply.to_string())),
            should_fail: AtomicBool::new(false),
            call_count: AtomicU64::new(0),
            last_prompt: Arc::new(RwLock::new(None)),
            delay: None,
        }
    }

    pub fn failing() -> Self {
        let model = Self::replying("");
        model.should_fail.store(true, Ordering::Relaxed);
        model
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::replying("")
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }

    pub async fn set_reply(&self, reply: &str) {
        *self.reply.write().await = reply.to_string();
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub async fn last_prompt(&self) -> Option<String> {
        self.last_prompt.read().await.clone()
    }
}

#[async_trait]
impl LanguageModel for MockLanguageModel {
    fn name(&self) -> &str {
        "mock-llm"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_prompt.write().await = Some(prompt.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::ProviderMalformed {
                provider: "mock-llm".to_string(),
                reason: "missing candidates".to_string(),
            });
        }

        Ok(self.reply.read().await.clone())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn make_match(lat: f64, lng: f64, address: &str) -> GeocodeMatch {
    GeocodeMatch::new(lat, lng, address)
}
