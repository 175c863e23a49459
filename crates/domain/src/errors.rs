use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Provider {provider} unavailable: {reason}")]
    ProviderUnavailable { provider: String, reason: String },

    #[error("Provider {provider} returned HTTP {status}")]
    ProviderStatus { provider: String, status: u16 },

    #[error("Provider {provider} returned a malformed response: {reason}")]
    ProviderMalformed { provider: String, reason: String },

    #[error("Provider {0} timed out")]
    ProviderTimeout(String),

    #[error("Provider {0} is not configured")]
    ProviderDisabled(String),
}
