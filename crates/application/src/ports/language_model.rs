use async_trait::async_trait;
use relief_geocoder_domain::DomainError;

/// Language-understanding provider used to pull place names out of text.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    fn name(&self) -> &str;

    /// False when no credentials are configured.
    fn is_enabled(&self) -> bool;

    /// Send `prompt` and return the model's raw text reply.
    async fn complete(&self, prompt: &str) -> Result<String, DomainError>;
}
