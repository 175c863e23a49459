//! Relief Geocoder Domain Layer
pub mod cache_entry;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod geocode;
pub mod validators;

pub use cache_entry::{expiry_after, CacheEntry};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use extraction::ExtractionResult;
pub use geocode::{Confidence, Coordinates, GeocodeMatch, GeocodeResult, ProviderId};
