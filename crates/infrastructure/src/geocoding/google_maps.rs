use async_trait::async_trait;
use relief_geocoder_application::ports::GeocodingProvider;
use relief_geocoder_domain::config::GoogleMapsConfig;
use relief_geocoder_domain::{Confidence, DomainError, GeocodeMatch, ProviderId};
use serde_json::Value;
use tracing::debug;

use crate::http::{fetch_json, malformed, SHARED_CLIENT};

pub const PROVIDER_ID: &str = "google_maps";

/// Google Maps Geocoding API adapter.
///
/// `ROOFTOP` precision is reported as high confidence, anything coarser as
/// medium.
pub struct GoogleMapsGeocoder {
    api_key: Option<String>,
    base_url: String,
}

impl GoogleMapsGeocoder {
    pub fn new(cfg: &GoogleMapsConfig) -> Self {
        Self {
            api_key: cfg.api_key.clone().filter(|k| !k.is_empty()),
            base_url: cfg.base_url.clone(),
        }
    }
}

#[async_trait]
impl GeocodingProvider for GoogleMapsGeocoder {
    fn id(&self) -> ProviderId {
        ProviderId::new(PROVIDER_ID)
    }

    fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    async fn attempt(&self, location_name: &str) -> Result<Vec<GeocodeMatch>, DomainError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| DomainError::ProviderDisabled(PROVIDER_ID.to_string()))?;

        debug!(location = %location_name, "Querying Google Maps");

        let request = SHARED_CLIENT
            .get(&self.base_url)
            .query(&[("address", location_name), ("key", api_key)]);

        let body = fetch_json(PROVIDER_ID, request).await?;
        parse_response(&body)
    }
}

fn parse_response(body: &Value) -> Result<Vec<GeocodeMatch>, DomainError> {
    let status = body["status"]
        .as_str()
        .ok_or_else(|| malformed(PROVIDER_ID, "missing status"))?;

    match status {
        "OK" => {}
        "ZERO_RESULTS" => return Ok(Vec::new()),
        other => {
            let detail = body["error_message"].as_str().unwrap_or("no detail");
            return Err(DomainError::ProviderUnavailable {
                provider: PROVIDER_ID.to_string(),
                reason: format!("{other}: {detail}"),
            });
        }
    }

    let results = body["results"]
        .as_array()
        .ok_or_else(|| malformed(PROVIDER_ID, "missing results"))?;

    results
        .iter()
        .map(|result| {
            let geometry = &result["geometry"];
            let lat = geometry["location"]["lat"]
                .as_f64()
                .ok_or_else(|| malformed(PROVIDER_ID, "missing geometry.location.lat"))?;
            let lng = geometry["location"]["lng"]
                .as_f64()
                .ok_or_else(|| malformed(PROVIDER_ID, "missing geometry.location.lng"))?;
            let address = result["formatted_address"].as_str().unwrap_or_default();

            let confidence = match geometry["location_type"].as_str() {
                Some("ROOFTOP") => Confidence::High,
                _ => Confidence::Medium,
            };

            Ok(GeocodeMatch::new(lat, lng, address).with_confidence(confidence))
        })
        .collect()
}
