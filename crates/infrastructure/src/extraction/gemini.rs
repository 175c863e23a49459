//! Gemini `generateContent` adapter used for location extraction.
//!
//! Thinking models may return parts tagged `thought: true`; only the final
//! non-thought text is kept.

use async_trait::async_trait;
use relief_geocoder_application::ports::LanguageModel;
use relief_geocoder_domain::config::GeminiConfig;
use relief_geocoder_domain::DomainError;
use serde_json::{json, Value};
use tracing::debug;

use crate::http::{fetch_json, malformed, SHARED_CLIENT};

pub const PROVIDER_ID: &str = "gemini";

pub struct GeminiLanguageModel {
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiLanguageModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiLanguageModel")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .finish()
    }
}

impl GeminiLanguageModel {
    pub fn new(cfg: &GeminiConfig) -> Self {
        Self {
            api_key: cfg.api_key.clone().filter(|k| !k.is_empty()),
            model: cfg.model.clone(),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LanguageModel for GeminiLanguageModel {
    fn name(&self) -> &str {
        PROVIDER_ID
    }

    fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| DomainError::ProviderDisabled(PROVIDER_ID.to_string()))?;

        debug!(model = %self.model, prompt_len = prompt.len(), "Calling Gemini");

        let request = SHARED_CLIENT
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&json!({
                "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
                "generationConfig": { "temperature": 0.0, "maxOutputTokens": 64 }
            }));

        let body = fetch_json(PROVIDER_ID, request).await?;
        parse_response(&body)
    }
}

fn parse_response(body: &Value) -> Result<String, DomainError> {
    let parts = body["candidates"]
        .get(0)
        .and_then(|c| c["content"]["parts"].as_array())
        .ok_or_else(|| malformed(PROVIDER_ID, "missing candidates[0].content.parts"))?;

    let text: String = parts
        .iter()
        .filter(|p| !p["thought"].as_bool().unwrap_or(false))
        .filter_map(|p| p["text"].as_str())
        .collect();

    if text.is_empty() {
        return Err(malformed(PROVIDER_ID, "candidate contained no text"));
    }

    Ok(text)
}
