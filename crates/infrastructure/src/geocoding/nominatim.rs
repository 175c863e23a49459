use async_trait::async_trait;
use relief_geocoder_application::ports::GeocodingProvider;
use relief_geocoder_domain::config::NominatimConfig;
use relief_geocoder_domain::{Confidence, DomainError, GeocodeMatch, ProviderId};
use serde_json::Value;
use tracing::debug;

use crate::http::{fetch_json, malformed, SHARED_CLIENT};

pub const PROVIDER_ID: &str = "nominatim";

/// OpenStreetMap Nominatim adapter. Keyless; enabled by configuration.
pub struct NominatimGeocoder {
    enabled: bool,
    base_url: String,
    user_agent: String,
}

impl NominatimGeocoder {
    pub fn new(cfg: &NominatimConfig) -> Self {
        Self {
            enabled: cfg.enabled,
            base_url: cfg.base_url.clone(),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

#[async_trait]
impl GeocodingProvider for NominatimGeocoder {
    fn id(&self) -> ProviderId {
        ProviderId::new(PROVIDER_ID)
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn attempt(&self, location_name: &str) -> Result<Vec<GeocodeMatch>, DomainError> {
        if !self.enabled {
            return Err(DomainError::ProviderDisabled(PROVIDER_ID.to_string()));
        }

        debug!(location = %location_name, "Querying Nominatim");

        let request = SHARED_CLIENT
            .get(&self.base_url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .query(&[("q", location_name), ("format", "json"), ("limit", "1")]);

        let body = fetch_json(PROVIDER_ID, request).await?;
        parse_response(&body)
    }
}

/// Nominatim has no confidence signal, so every match is medium.
fn parse_response(body: &Value) -> Result<Vec<GeocodeMatch>, DomainError> {
    let places = body
        .as_array()
        .ok_or_else(|| malformed(PROVIDER_ID, "expected a JSON array"))?;

    places
        .iter()
        .map(|place| {
            let lat = coordinate(&place["lat"])
                .ok_or_else(|| malformed(PROVIDER_ID, "missing or invalid lat"))?;
            let lon = coordinate(&place["lon"])
                .ok_or_else(|| malformed(PROVIDER_ID, "missing or invalid lon"))?;
            let address = place["display_name"].as_str().unwrap_or_default();

            Ok(GeocodeMatch::new(lat, lon, address).with_confidence(Confidence::Medium))
        })
        .collect()
}

// Nominatim serializes coordinates as strings.
fn coordinate(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}
