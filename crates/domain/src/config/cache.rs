use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage medium behind the cache-aside facade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Durable SQLite table (survives restarts)
    #[default]
    Sqlite,
    /// Process-local map, lost on restart
    Memory,
}

impl FromStr for CacheBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown cache backend '{other}'")),
        }
    }
}

impl fmt::Display for CacheBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => f.write_str("sqlite"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Cache TTL policy and maintenance settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default)]
    pub backend: CacheBackend,

    /// TTL for successful geocodes in seconds (default: 86400)
    #[serde(default = "default_geocode_ttl")]
    pub geocode_ttl_secs: u64,

    /// TTL for negative geocodes in seconds (default: 3600)
    #[serde(default = "default_negative_ttl")]
    pub negative_ttl_secs: u64,

    /// TTL for extraction results in seconds (default: 3600)
    #[serde(default = "default_extraction_ttl")]
    pub extraction_ttl_secs: u64,

    /// Interval between expired-entry sweeps in seconds (default: 300)
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            geocode_ttl_secs: default_geocode_ttl(),
            negative_ttl_secs: default_negative_ttl(),
            extraction_ttl_secs: default_extraction_ttl(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

fn default_geocode_ttl() -> u64 {
    86_400
}

fn default_negative_ttl() -> u64 {
    3_600
}

fn default_extraction_ttl() -> u64 {
    3_600
}

fn default_sweep_interval() -> u64 {
    300
}
