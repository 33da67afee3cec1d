//! Capability port for the language model.

use super::upstream::UpstreamResult;
use crate::settings::domain::{MaxTokens, Temperature};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// One completion request assembled by the generation stage.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    prompt: String,
    model: String,
    temperature: Temperature,
    max_tokens: MaxTokens,
}

impl CompletionRequest {
    /// Creates a completion request.
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        model: impl Into<String>,
        temperature: Temperature,
        max_tokens: MaxTokens,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            temperature,
            max_tokens,
        }
    }

    /// Returns the rendered prompt.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the sampling temperature.
    #[must_use]
    pub const fn temperature(&self) -> Temperature {
        self.temperature
    }

    /// Returns the completion token budget.
    #[must_use]
    pub const fn max_tokens(&self) -> MaxTokens {
        self.max_tokens
    }
}

/// Language-model operations the generation stage depends on.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Requests one structured completion and returns the raw text.
    ///
    /// # Errors
    ///
    /// Returns [`super::UpstreamError`] when the model call fails.
    async fn complete(&self, request: &CompletionRequest) -> UpstreamResult<String>;
}
