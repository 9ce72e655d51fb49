use async_trait::async_trait;

use crate::error::Result;

/// Trait for LLM providers that turn a prompt into text
#[async_trait]
pub trait Generator: Send + Sync {
    /// Single-shot generation; errors are returned as-is, never retried
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the provider name (e.g., "Google Gemini")
    fn provider_name(&self) -> &str;

    /// Get the model name being used
    fn model_name(&self) -> &str;
}
