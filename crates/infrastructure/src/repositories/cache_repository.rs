use async_trait::async_trait;
use relief_geocoder_application::ports::{CacheStore, Clock, SystemClock};
use relief_geocoder_domain::expiry_after;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

type EntryRow = (String, i64);

/// Durable expiring key-value store on SQLite.
///
/// Expiry is stored as Unix milliseconds. Every storage error is logged and
/// then reported as a miss or a no-op.
pub struct SqliteCacheStore {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
}

impl SqliteCacheStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    fn now_millis(&self) -> i64 {
        self.clock.now().timestamp_millis()
    }

    /// Delete `key` only while it still carries the stale expiry, so a fresh
    /// value written concurrently survives.
    async fn evict_stale(&self, key: &str, now_ms: i64) {
        let result = sqlx::query("DELETE FROM cache_entries WHERE key = ? AND expires_at <= ?")
            .bind(key)
            .bind(now_ms)
            .execute(&self.pool)
            .await;

        match result {
            Ok(r) => debug!(key, evicted = r.rows_affected(), "Lazy eviction of expired entry"),
            Err(e) => warn!(key, error = %e, "Failed to evict expired cache entry"),
        }
    }
}

#[async_trait]
impl CacheStore for SqliteCacheStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Option<serde_json::Value> {
        let row = sqlx::query_as::<_, EntryRow>(
            "SELECT value, expires_at FROM cache_entries WHERE key = ?",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await;

        let (value, expires_at) = match row {
            Ok(Some(row)) => row,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "Cache read failed, treating as miss");
                return None;
            }
        };

        let now_ms = self.now_millis();
        if now_ms >= expires_at {
            self.evict_stale(key, now_ms).await;
            return None;
        }

        match serde_json::from_str(&value) {
            Ok(json) => Some(json),
            Err(e) => {
                warn!(key, error = %e, "Corrupt cache payload, treating as miss");
                None
            }
        }
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: &str, value: serde_json::Value, ttl: Duration) {
        let now = self.clock.now();
        let expires_at = expiry_after(now, ttl).timestamp_millis();

        let result = sqlx::query(
            "INSERT INTO cache_entries (key, value, expires_at, updated_at)
             VALUES (?, ?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                expires_at = excluded.expires_at,
                updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value.to_string())
        .bind(expires_at)
        .bind(now.timestamp_millis())
        .execute(&self.pool)
        .await;

        if let Err(e) = result {
            warn!(key, error = %e, "Cache write failed, value not cached");
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &str) {
        let result = sqlx::query("DELETE FROM cache_entries WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await;

        if let Err(e) = result {
            warn!(key, error = %e, "Cache delete failed");
        }
    }

    #[instrument(skip(self))]
    async fn sweep_expired(&self) -> u64 {
        let result = sqlx::query("DELETE FROM cache_entries WHERE expires_at <= ?")
            .bind(self.now_millis())
            .execute(&self.pool)
            .await;

        match result {
            Ok(r) => r.rows_affected(),
            Err(e) => {
                warn!(error = %e, "Cache sweep failed");
                0
            }
        }
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
