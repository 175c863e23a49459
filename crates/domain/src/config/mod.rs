//! Configuration module for Relief Geocoder
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `cache`: Cache backend, TTLs and sweep interval
//! - `providers`: Geocoding and extraction provider credentials
//! - `logging`: Logging settings
//! - `database`: Database configuration
//! - `errors`: Configuration errors

pub mod cache;
pub mod database;
pub mod errors;
pub mod logging;
pub mod providers;
pub mod root;

pub use cache::{CacheBackend, CacheConfig};
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use providers::{
    GeminiConfig, GoogleMapsConfig, MapboxConfig, NominatimConfig, ProvidersConfig,
    KNOWN_GEOCODERS,
};
pub use root::{CliOverrides, Config};
