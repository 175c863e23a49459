use async_trait::async_trait;
use relief_geocoder_domain::{DomainError, GeocodeMatch, ProviderId};

/// One external geocoding service.
///
/// Every failure mode (network, non-success status, malformed payload) is an
/// `Err`; the resolver treats any `Err` exactly like zero matches and moves
/// on to the next provider.
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Identifier recorded as `provider` on results this adapter produces.
    fn id(&self) -> ProviderId;

    /// False when credentials are missing. Disabled providers are skipped
    /// without counting as a failure.
    fn is_enabled(&self) -> bool;

    /// Look up `location_name`, returning zero or more matches in the
    /// provider's own ranking order.
    async fn attempt(&self, location_name: &str) -> Result<Vec<GeocodeMatch>, DomainError>;
}
