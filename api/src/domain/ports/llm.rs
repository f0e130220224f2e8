//! LLM provider port trait
//!
//! Each provider turns a prompt into text for a given model identifier.
//! Failures are reported as `LlmError` and handled by the synthesis chain.

use async_trait::async_trait;

use crate::error::LlmError;

/// A model advertised by a provider's listing endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    /// Model identifier as accepted by `generate`
    pub id: String,
    /// Whether the model can generate content
    pub supports_generation: bool,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Short provider name used in logs
    fn name(&self) -> &str;

    /// Generate text for `prompt` with `model`
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError>;

    /// List models currently offered by the provider
    async fn list_models(&self) -> Result<Vec<ModelInfo>, LlmError> {
        Err(LlmError::Unsupported(format!(
            "{} does not list models",
            self.name()
        )))
    }
}
