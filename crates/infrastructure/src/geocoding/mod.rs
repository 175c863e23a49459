pub mod google_maps;
pub mod mapbox;
pub mod nominatim;

pub use google_maps::GoogleMapsGeocoder;
pub use mapbox::MapboxGeocoder;
pub use nominatim::NominatimGeocoder;

use relief_geocoder_application::ports::GeocodingProvider;
use relief_geocoder_domain::config::ProvidersConfig;
use std::sync::Arc;
use tracing::{info, warn};

/// Build the geocoders named in `providers.order`, in that order.
///
/// Unconfigured geocoders are still included; the resolver skips them.
pub fn build_geocoders(cfg: &ProvidersConfig) -> Vec<Arc<dyn GeocodingProvider>> {
    let geocoders: Vec<Arc<dyn GeocodingProvider>> = cfg
        .order
        .iter()
        .filter_map(|name| -> Option<Arc<dyn GeocodingProvider>> {
            match name.as_str() {
                google_maps::PROVIDER_ID => Some(Arc::new(GoogleMapsGeocoder::new(&cfg.google_maps))),
                mapbox::PROVIDER_ID => Some(Arc::new(MapboxGeocoder::new(&cfg.mapbox))),
                nominatim::PROVIDER_ID => Some(Arc::new(NominatimGeocoder::new(&cfg.nominatim))),
                other => {
                    warn!(provider = other, "Unknown geocoder in providers.order, ignoring");
                    None
                }
            }
        })
        .collect();

    let enabled: Vec<String> = geocoders
        .iter()
        .filter(|g| g.is_enabled())
        .map(|g| g.id().to_string())
        .collect();

    info!(
        order = ?cfg.order,
        enabled = ?enabled,
        "Geocoding providers configured"
    );

    if enabled.is_empty() {
        warn!("No geocoding provider is enabled; every lookup will be cached as unresolved");
    }

    geocoders
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_configured_order() {
        let mut cfg = ProvidersConfig::default();
        cfg.order = vec!["nominatim".to_string(), "google_maps".to_string()];

        let ids: Vec<String> = build_geocoders(&cfg)
            .iter()
            .map(|g| g.id().to_string())
            .collect();

        assert_eq!(ids, vec!["nominatim", "google_maps"]);
    }

    #[test]
    fn missing_credentials_disable_keyed_geocoders() {
        let cfg = ProvidersConfig::default();
        let geocoders = build_geocoders(&cfg);

        let enabled: Vec<(String, bool)> = geocoders
            .iter()
            .map(|g| (g.id().to_string(), g.is_enabled()))
            .collect();

        assert_eq!(
            enabled,
            vec![
                ("google_maps".to_string(), false),
                ("mapbox".to_string(), false),
                ("nominatim".to_string(), true),
            ]
        );
    }

    #[test]
    fn all_disabled_chain_is_still_built() {
        let mut cfg = ProvidersConfig::default();
        cfg.nominatim.enabled = false;

        let geocoders = build_geocoders(&cfg);

        assert_eq!(geocoders.len(), 3);
        assert!(geocoders.iter().all(|g| !g.is_enabled()));
    }
}
