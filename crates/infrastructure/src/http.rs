use relief_geocoder_domain::DomainError;
use reqwest::RequestBuilder;
use serde_json::Value;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// Shared HTTP client with connection pooling for all provider adapters.
///
/// The resolver applies its own per-call timeout; this one only stops a
/// request from hanging forever when an adapter is used on its own.
pub static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// Send `request` and decode a JSON body.
///
/// Transport failures, non-success statuses and undecodable bodies all map
/// to a provider error tagged with `provider`. Request URLs carry API keys
/// as query parameters, so transport errors drop the URL.
pub async fn fetch_json(provider: &str, request: RequestBuilder) -> Result<Value, DomainError> {
    let response = request
        .send()
        .await
        .map_err(|e| DomainError::ProviderUnavailable {
            provider: provider.to_string(),
            reason: e.without_url().to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(DomainError::ProviderStatus {
            provider: provider.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| DomainError::ProviderUnavailable {
            provider: provider.to_string(),
            reason: e.without_url().to_string(),
        })?;

    debug!(provider, response_len = body.len(), "Provider response received");

    serde_json::from_slice(&body).map_err(|e| DomainError::ProviderMalformed {
        provider: provider.to_string(),
        reason: e.to_string(),
    })
}

pub(crate) fn malformed(provider: &str, reason: impl Into<String>) -> DomainError {
    DomainError::ProviderMalformed {
        provider: provider.to_string(),
        reason: reason.into(),
    }
}
