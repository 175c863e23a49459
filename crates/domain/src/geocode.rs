use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Ordinal confidence attached to a geocode result.
///
/// Ordering follows precision: `Unknown < Low < Medium < High`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Unknown = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for Confidence {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Unknown,
        })
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of the adapter that produced a result, or `none`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(Arc<str>);

impl ProviderId {
    pub const NONE: &'static str = "none";

    pub fn new(id: &str) -> Self {
        Self(Arc::from(id))
    }

    pub fn none() -> Self {
        Self::new(Self::NONE)
    }

    pub fn is_none(&self) -> bool {
        &*self.0 == Self::NONE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A single candidate returned by a geocoding provider.
///
/// Confidence is assigned by the adapter, since only it knows what the
/// provider's own precision signals mean.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeMatch {
    pub coordinates: Coordinates,
    pub formatted_address: String,
    pub confidence: Confidence,
}

impl GeocodeMatch {
    pub fn new(latitude: f64, longitude: f64, formatted_address: impl Into<String>) -> Self {
        Self {
            coordinates: Coordinates::new(latitude, longitude),
            formatted_address: formatted_address.into(),
            confidence: Confidence::Medium,
        }
    }

    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = confidence;
        self
    }
}

/// Outcome of resolving a location name. Never absent: a failed resolution
/// is a result without coordinates.
///
/// Latitude and longitude are stored together so one can never be set
/// without the other; on the wire they are flat nullable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "GeocodeResultWire", into = "GeocodeResultWire")]
pub struct GeocodeResult {
    pub coordinates: Option<Coordinates>,
    pub formatted_address: String,
    pub provider: ProviderId,
    pub confidence: Confidence,
}

impl GeocodeResult {
    pub fn from_match(provider: ProviderId, m: GeocodeMatch) -> Self {
        Self {
            coordinates: Some(m.coordinates),
            formatted_address: m.formatted_address,
            provider,
            confidence: m.confidence,
        }
    }

    /// Terminal result used when every provider is exhausted.
    pub fn unresolved(location_name: &str) -> Self {
        Self {
            coordinates: None,
            formatted_address: location_name.to_string(),
            provider: ProviderId::none(),
            confidence: Confidence::Unknown,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.coordinates.is_some()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.map(|c| c.latitude)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.map(|c| c.longitude)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeocodeResultWire {
    latitude: Option<f64>,
    longitude: Option<f64>,
    formatted_address: String,
    provider: ProviderId,
    confidence: Confidence,
}

impl From<GeocodeResultWire> for GeocodeResult {
    fn from(wire: GeocodeResultWire) -> Self {
        let coordinates = match (wire.latitude, wire.longitude) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
            _ => None,
        };
        Self {
            coordinates,
            formatted_address: wire.formatted_address,
            provider: wire.provider,
            confidence: wire.confidence,
        }
    }
}

impl From<GeocodeResult> for GeocodeResultWire {
    fn from(result: GeocodeResult) -> Self {
        Self {
            latitude: result.latitude(),
            longitude: result.longitude(),
            formatted_address: result.formatted_address,
            provider: result.provider,
            confidence: result.confidence,
        }
    }
}
