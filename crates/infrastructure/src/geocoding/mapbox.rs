use async_trait::async_trait;
use relief_geocoder_application::ports::GeocodingProvider;
use relief_geocoder_domain::config::MapboxConfig;
use relief_geocoder_domain::{Confidence, DomainError, GeocodeMatch, ProviderId};
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use crate::http::{fetch_json, malformed, SHARED_CLIENT};

pub const PROVIDER_ID: &str = "mapbox";

/// Mapbox forward geocoding adapter.
///
/// Mapbox scores each feature with `relevance` in `[0, 1]`; features under
/// the configured threshold are medium confidence.
pub struct MapboxGeocoder {
    access_token: Option<String>,
    base_url: String,
    high_relevance: f64,
}

impl MapboxGeocoder {
    pub fn new(cfg: &MapboxConfig) -> Self {
        Self {
            access_token: cfg.access_token.clone().filter(|t| !t.is_empty()),
            base_url: cfg.base_url.clone(),
            high_relevance: cfg.high_relevance,
        }
    }

    /// `{base}/{query}.json`, with the query percent-encoded as one segment.
    fn endpoint(&self, location_name: &str) -> Result<Url, DomainError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            DomainError::ProviderUnavailable {
                provider: PROVIDER_ID.to_string(),
                reason: format!("invalid base url: {e}"),
            }
        })?;

        url.path_segments_mut()
            .map_err(|_| DomainError::ProviderUnavailable {
                provider: PROVIDER_ID.to_string(),
                reason: "base url cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .push(&format!("{location_name}.json"));

        Ok(url)
    }
}

#[async_trait]
impl GeocodingProvider for MapboxGeocoder {
    fn id(&self) -> ProviderId {
        ProviderId::new(PROVIDER_ID)
    }

    fn is_enabled(&self) -> bool {
        self.access_token.is_some()
    }

    async fn attempt(&self, location_name: &str) -> Result<Vec<GeocodeMatch>, DomainError> {
        let token = self
            .access_token
            .as_deref()
            .ok_or_else(|| DomainError::ProviderDisabled(PROVIDER_ID.to_string()))?;

        debug!(location = %location_name, "Querying Mapbox");

        let request = SHARED_CLIENT
            .get(self.endpoint(location_name)?)
            .query(&[("access_token", token), ("limit", "1")]);

        let body = fetch_json(PROVIDER_ID, request).await?;
        parse_response(&body, self.high_relevance)
    }
}

fn parse_response(body: &Value, high_relevance: f64) -> Result<Vec<GeocodeMatch>, DomainError> {
    let features = body["features"]
        .as_array()
        .ok_or_else(|| malformed(PROVIDER_ID, "missing features"))?;

    features
        .iter()
        .map(|feature| {
            // GeoJSON order: [longitude, latitude]
            let center = feature["center"]
                .as_array()
                .filter(|c| c.len() == 2)
                .ok_or_else(|| malformed(PROVIDER_ID, "missing center"))?;
            let lng = center[0]
                .as_f64()
                .ok_or_else(|| malformed(PROVIDER_ID, "non-numeric longitude"))?;
            let lat = center[1]
                .as_f64()
                .ok_or_else(|| malformed(PROVIDER_ID, "non-numeric latitude"))?;
            let address = feature["place_name"].as_str().unwrap_or_default();

            let confidence = match feature["relevance"].as_f64() {
                Some(r) if r >= high_relevance => Confidence::High,
                _ => Confidence::Medium,
            };

            Ok(GeocodeMatch::new(lat, lng, address).with_confidence(confidence))
        })
        .collect()
}
