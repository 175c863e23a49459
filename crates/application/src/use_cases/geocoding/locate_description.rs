use relief_geocoder_domain::validators::validate_description;
use relief_geocoder_domain::{DomainError, ExtractionResult};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::resolve_location::{Resolution, ResolveLocationUseCase};
use crate::use_cases::extraction::ExtractLocationUseCase;

/// Outcome of turning a free-text description into coordinates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Located {
    pub description: String,
    pub extracted: ExtractionResult,
    pub location_name: String,
    #[serde(flatten)]
    pub result: relief_geocoder_domain::GeocodeResult,
    pub cache_hit: bool,
}

/// Extraction step followed by the fallback resolver.
///
/// When extraction finds nothing, the raw description itself is geocoded.
pub struct LocateDescriptionUseCase {
    extract: Arc<ExtractLocationUseCase>,
    resolve: Arc<ResolveLocationUseCase>,
}

impl LocateDescriptionUseCase {
    pub fn new(extract: Arc<ExtractLocationUseCase>, resolve: Arc<ResolveLocationUseCase>) -> Self {
        Self { extract, resolve }
    }

    #[instrument(skip(self, description))]
    pub async fn execute(&self, description: &str) -> Result<Located, DomainError> {
        validate_description(description)?;

        let extracted = self.extract.execute(description).await?;
        let location_name = extracted.location_or(description).to_string();

        if !extracted.is_found() {
            debug!("No location extracted, geocoding the description as given");
        }

        let Resolution {
            result, cache_hit, ..
        } = self.resolve.execute(&location_name).await?;

        Ok(Located {
            description: description.to_string(),
            extracted,
            location_name,
            result,
            cache_hit,
        })
    }
}
