//! Domain model for application settings.
//!
//! Settings values are validated scalars so an out-of-range limit or an
//! empty hashtag is unrepresentable past the construction boundary.

mod error;
mod scalars;
mod settings;

pub use error::{SettingsEnvError, SettingsValidationError};
pub use scalars::{Hashtag, MaxTokens, PostLimit, Temperature};
pub use settings::{
    AppSettings, SettingsUpdate, DEFAULT_LLM_MODEL, DEFAULT_PROMPT_TEMPLATE, ENV_HASHTAGS,
    ENV_LLM_MAX_TOKENS, ENV_LLM_MODEL, ENV_LLM_TEMPERATURE, ENV_POST_LIMIT,
};
