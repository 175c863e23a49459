use relief_geocoder_domain::validators::validate_description;
use relief_geocoder_domain::{DomainError, ExtractionResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::ports::LanguageModel;
use crate::services::cache_key;
use crate::services::CacheAside;

pub const EXTRACTION_INSTRUCTION: &str = "Extract the most specific geographic location \
(place name, neighborhood, city, region or country) mentioned in the following disaster \
description. Reply with the location name only, formatted for a geocoder, e.g. \
\"Lower East Side, Manhattan, NY\". If no location is mentioned, reply with exactly UNKNOWN.";

/// Pulls a place name out of free text through a language model.
///
/// Provider failures and timeouts never surface: they produce `NoLocation`,
/// which is cached like any other answer so a flaky model is not called on
/// every request.
pub struct ExtractLocationUseCase {
    cache: Arc<CacheAside>,
    model: Arc<dyn LanguageModel>,
    provider_timeout: Duration,
}

impl ExtractLocationUseCase {
    pub fn new(
        cache: Arc<CacheAside>,
        model: Arc<dyn LanguageModel>,
        provider_timeout: Duration,
    ) -> Self {
        Self {
            cache,
            model,
            provider_timeout,
        }
    }

    #[instrument(skip(self, description))]
    pub async fn execute(&self, description: &str) -> Result<ExtractionResult, DomainError> {
        validate_description(description)?;

        if !self.model.is_enabled() {
            debug!(model = self.model.name(), "Language model not configured, skipping extraction");
            return Ok(ExtractionResult::NoLocation);
        }

        let key = cache_key::extraction_key(description);

        if let Some(cached) = self.cache.get::<ExtractionResult>(&key).await {
            debug!(found = cached.is_found(), "Extraction cache HIT");
            return Ok(cached);
        }

        let prompt = build_prompt(description);

        let completion = tokio::time::timeout(self.provider_timeout, self.model.complete(&prompt))
            .await
            .unwrap_or_else(|_| Err(DomainError::ProviderTimeout(self.model.name().to_string())));

        let result = match completion {
            Ok(raw) => ExtractionResult::from_raw(&raw),
            Err(e) => {
                warn!(
                    model = self.model.name(),
                    error = %e,
                    timeout_ms = self.provider_timeout.as_millis() as u64,
                    "Location extraction failed, treating as no location"
                );
                ExtractionResult::NoLocation
            }
        };

        self.cache
            .set(&key, &result, self.cache.policy().extraction_ttl)
            .await;

        info!(location = ?result.location(), "Location extracted");
        Ok(result)
    }
}

fn build_prompt(description: &str) -> String {
    format!("{EXTRACTION_INSTRUCTION}\n\nDescription: {}", description.trim())
}
