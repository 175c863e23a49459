use async_trait::async_trait;
use std::time::Duration;

/// Expiring key-value store behind the cache-aside facade.
///
/// Implementations never surface storage faults: a failing medium reads as
/// a miss, writes and deletes become no-ops and a sweep removes nothing.
/// Callers therefore degrade to recomputing instead of failing.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the live value for `key`.
    ///
    /// An entry whose expiry has been reached is a miss and is deleted
    /// before this returns.
    async fn get(&self, key: &str) -> Option<serde_json::Value>;

    /// Upserts `value` under `key`, expiring `ttl` from now.
    ///
    /// Any previous value and expiry are replaced together.
    async fn set(&self, key: &str, value: serde_json::Value, ttl: Duration);

    /// Removes `key` if present.
    async fn delete(&self, key: &str);

    /// Deletes every expired entry and returns how many were removed.
    async fn sweep_expired(&self) -> u64;

    /// Short backend name for logs.
    fn backend_name(&self) -> &'static str;
}
