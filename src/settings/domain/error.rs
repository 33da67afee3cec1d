//! Error types for settings validation and environment bootstrap.

use thiserror::Error;

/// Errors returned while constructing settings values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SettingsValidationError {
    /// The hashtag is empty or contains whitespace after normalization.
    #[error("invalid hashtag '{0}', expected a non-empty tag without whitespace")]
    InvalidHashtag(String),

    /// The settings contain no hashtags to monitor.
    #[error("at least one hashtag must be configured")]
    NoHashtags,

    /// The post limit is outside the supported range.
    #[error("post limit {0} outside supported range 10-500")]
    PostLimitOutOfRange(u32),

    /// The sampling temperature is outside the supported range.
    #[error("temperature {0} outside supported range 0.0-2.0")]
    TemperatureOutOfRange(f32),

    /// The completion token budget is outside the supported range.
    #[error("max tokens {0} outside supported range 100-4000")]
    MaxTokensOutOfRange(u32),

    /// The language-model name is empty after trimming.
    #[error("language-model name must not be empty")]
    EmptyModelName,

    /// The prompt template is empty after trimming.
    #[error("prompt template must not be empty")]
    EmptyPromptTemplate,
}

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("environment variable {variable} is invalid: {reason}")]
pub struct SettingsEnvError {
    /// Name of the offending environment variable.
    pub variable: String,
    /// Why the value was rejected.
    pub reason: String,
}

impl SettingsEnvError {
    /// Creates an environment bootstrap error for the named variable.
    #[must_use]
    pub fn new(variable: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            reason: reason.into(),
        }
    }
}
