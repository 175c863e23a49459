//! Relief Geocoder Infrastructure Layer
//!
//! Storage backends for the expiring cache and HTTP adapters for the
//! external geocoding and language providers.
pub mod cache;
pub mod database;
pub mod extraction;
pub mod geocoding;
pub mod http;
pub mod repositories;
