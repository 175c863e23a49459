//! Relief Geocoder Application Layer
//!
//! Ports implemented by the infrastructure crate, the cache-aside facade and
//! the use cases built on top of them.
pub mod ports;
pub mod services;
pub mod use_cases;
