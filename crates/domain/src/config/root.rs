use serde::{Deserialize, Serialize};
use std::path::Path;

use super::cache::{CacheBackend, CacheConfig};
use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::providers::{ProvidersConfig, KNOWN_GEOCODERS};

const DEFAULT_CONFIG_FILE: &str = "./relief-geocoder.toml";

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub providers: ProvidersConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line values that override the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub database_path: Option<String>,
    pub cache_backend: Option<CacheBackend>,
    pub log_level: Option<String>,
    pub provider_timeout_ms: Option<u64>,
}

impl Config {
    /// Load configuration: defaults, then file, then environment
    /// credentials, then CLI overrides.
    ///
    /// Without an explicit path, `./relief-geocoder.toml` is read when it
    /// exists.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        config
            .providers
            .apply_env(|name| std::env::var(name).ok());
        config.apply_overrides(overrides);

        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(path) = overrides.database_path {
            self.database.path = path;
        }
        if let Some(backend) = overrides.cache_backend {
            self.cache.backend = backend;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(timeout) = overrides.provider_timeout_ms {
            self.providers.timeout_ms = timeout;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.geocode_ttl_secs == 0
            || self.cache.negative_ttl_secs == 0
            || self.cache.extraction_ttl_secs == 0
        {
            return Err(ConfigError::Invalid(
                "cache TTLs must be greater than zero".to_string(),
            ));
        }

        if self.cache.sweep_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "cache.sweep_interval_secs must be greater than zero".to_string(),
            ));
        }

        if self.providers.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "providers.timeout_ms must be greater than zero".to_string(),
            ));
        }

        for name in &self.providers.order {
            if !KNOWN_GEOCODERS.contains(&name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "unknown geocoder '{}' in providers.order (expected one of: {})",
                    name,
                    KNOWN_GEOCODERS.join(", ")
                )));
            }
        }

        let relevance = self.providers.mapbox.high_relevance;
        if !(0.0..=1.0).contains(&relevance) {
            return Err(ConfigError::Invalid(
                "providers.mapbox.high_relevance must be between 0.0 and 1.0".to_string(),
            ));
        }

        Ok(())
    }
}
