use serde::{Deserialize, Serialize};

/// Geocoder identifiers accepted in `providers.order`
pub const KNOWN_GEOCODERS: [&str; 3] = ["google_maps", "mapbox", "nominatim"];

/// External provider credentials and call policy
///
/// Built once at startup (file, then environment) and handed to each adapter
/// at construction. A geocoder without credentials is disabled and skipped.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProvidersConfig {
    /// Priority order of geocoders; first with a match wins
    /// (default: ["google_maps", "mapbox", "nominatim"])
    #[serde(default = "default_order")]
    pub order: Vec<String>,

    /// Timeout for a single provider call in milliseconds (default: 5000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default)]
    pub google_maps: GoogleMapsConfig,

    #[serde(default)]
    pub mapbox: MapboxConfig,

    #[serde(default)]
    pub nominatim: NominatimConfig,

    #[serde(default)]
    pub gemini: GeminiConfig,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            order: default_order(),
            timeout_ms: default_timeout_ms(),
            google_maps: GoogleMapsConfig::default(),
            mapbox: MapboxConfig::default(),
            nominatim: NominatimConfig::default(),
            gemini: GeminiConfig::default(),
        }
    }
}

impl ProvidersConfig {
    /// Fill missing credentials from environment lookups.
    ///
    /// Values already present in the config file win.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if self.google_maps.api_key.is_none() {
            self.google_maps.api_key = non_empty("GOOGLE_MAPS_API_KEY");
        }
        if self.mapbox.access_token.is_none() {
            self.mapbox.access_token = non_empty("MAPBOX_ACCESS_TOKEN");
        }
        if self.gemini.api_key.is_none() {
            self.gemini.api_key =
                non_empty("GEMINI_API_KEY").or_else(|| non_empty("GOOGLE_API_KEY"));
        }
    }
}

/// Google Maps Geocoding API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoogleMapsConfig {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_google_base_url")]
    pub base_url: String,
}

impl Default for GoogleMapsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_google_base_url(),
        }
    }
}

/// Mapbox Geocoding API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MapboxConfig {
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default = "default_mapbox_base_url")]
    pub base_url: String,

    /// Relevance at or above which a Mapbox match counts as high confidence
    /// (default: 0.8)
    #[serde(default = "default_high_relevance")]
    pub high_relevance: f64,
}

impl Default for MapboxConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            base_url: default_mapbox_base_url(),
            high_relevance: default_high_relevance(),
        }
    }
}

/// OpenStreetMap Nominatim (keyless)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NominatimConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_nominatim_base_url")]
    pub base_url: String,

    /// Nominatim's usage policy requires an identifying User-Agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_nominatim_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

/// Gemini language model used for location extraction
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_gemini_model")]
    pub model: String,

    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_gemini_model(),
            base_url: default_gemini_base_url(),
        }
    }
}

fn default_order() -> Vec<String> {
    KNOWN_GEOCODERS.iter().map(|s| s.to_string()).collect()
}

fn default_timeout_ms() -> u64 {
    5_000
}

fn default_true() -> bool {
    true
}

fn default_google_base_url() -> String {
    "https://maps.googleapis.com/maps/api/geocode/json".to_string()
}

fn default_mapbox_base_url() -> String {
    "https://api.mapbox.com/geocoding/v5/mapbox.places".to_string()
}

fn default_high_relevance() -> f64 {
    0.8
}

fn default_nominatim_base_url() -> String {
    "https://nominatim.openstreetmap.org/search".to_string()
}

fn default_user_agent() -> String {
    concat!("relief-geocoder/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}
