//! Application settings aggregate and environment bootstrap.

use super::{Hashtag, MaxTokens, PostLimit, SettingsEnvError, SettingsValidationError, Temperature};
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable holding the comma-separated hashtag list.
pub const ENV_HASHTAGS: &str = "AGORA_HASHTAGS";
/// Environment variable holding the per-cycle post limit.
pub const ENV_POST_LIMIT: &str = "AGORA_POST_LIMIT";
/// Environment variable holding the language-model name.
pub const ENV_LLM_MODEL: &str = "AGORA_LLM_MODEL";
/// Environment variable holding the sampling temperature.
pub const ENV_LLM_TEMPERATURE: &str = "AGORA_LLM_TEMPERATURE";
/// Environment variable holding the completion token budget.
pub const ENV_LLM_MAX_TOKENS: &str = "AGORA_LLM_MAX_TOKENS";

/// Model used when no configuration is present.
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

/// Hashtag monitored when no configuration is present.
const DEFAULT_HASHTAG: &str = "uspol";

/// Prompt template used when no configuration is present.
///
/// Rendered with `minijinja`; the `posts` variable is bound to a numbered
/// digest of the fetched posts.
pub const DEFAULT_PROMPT_TEMPLATE: &str = "\
Analyze the following social media posts about current events and news:

{{ posts }}

Based on these posts, generate poll topics that would engage the community. For each poll:
1. Create a clear, concise question (max 100 characters)
2. Provide 2-4 answer options
3. Focus on current events, news, or political topics mentioned in the posts
4. Make the poll balanced and non-partisan

Return your response as a JSON array of poll objects with this structure:
[
  {
    \"question\": \"Poll question here?\",
    \"options\": [\"Option 1\", \"Option 2\", \"Option 3\"],
    \"reasoning\": \"Brief explanation of why this poll is relevant\"
  }
]

Generate up to 5 poll ideas.
";

/// Process-wide configuration overridable at runtime.
///
/// Loaded from the environment once at startup as defaults, then
/// overwritten wholesale through the update operation. The fetch and
/// generation stages re-read the stored value on every invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    hashtags: Vec<Hashtag>,
    post_limit: PostLimit,
    llm_model: String,
    llm_temperature: Temperature,
    llm_max_tokens: MaxTokens,
    poll_prompt_template: String,
}

impl AppSettings {
    /// Creates validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsValidationError`] when the hashtag list is empty or
    /// the model name or prompt template is blank.
    pub fn new(
        hashtags: Vec<Hashtag>,
        post_limit: PostLimit,
        llm_model: impl Into<String>,
        llm_temperature: Temperature,
        llm_max_tokens: MaxTokens,
        poll_prompt_template: impl Into<String>,
    ) -> Result<Self, SettingsValidationError> {
        if hashtags.is_empty() {
            return Err(SettingsValidationError::NoHashtags);
        }
        let model = llm_model.into();
        if model.trim().is_empty() {
            return Err(SettingsValidationError::EmptyModelName);
        }
        let template = poll_prompt_template.into();
        if template.trim().is_empty() {
            return Err(SettingsValidationError::EmptyPromptTemplate);
        }
        Ok(Self {
            hashtags,
            post_limit,
            llm_model: model,
            llm_temperature,
            llm_max_tokens,
            poll_prompt_template: template,
        })
    }

    /// Loads settings from the environment, falling back to defaults for
    /// absent variables.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsEnvError`] naming the first variable holding an
    /// unusable value.
    pub fn from_env() -> Result<Self, SettingsEnvError> {
        let hashtags = match env::var(ENV_HASHTAGS) {
            Ok(raw) => parse_hashtag_list(&raw)
                .map_err(|error| SettingsEnvError::new(ENV_HASHTAGS, error.to_string()))?,
            Err(_) => Self::default().hashtags,
        };

        let post_limit = match env::var(ENV_POST_LIMIT) {
            Ok(raw) => parse_env_number(ENV_POST_LIMIT, &raw).and_then(|value| {
                PostLimit::new(value)
                    .map_err(|error| SettingsEnvError::new(ENV_POST_LIMIT, error.to_string()))
            })?,
            Err(_) => PostLimit::DEFAULT,
        };

        let llm_model = env::var(ENV_LLM_MODEL).unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_owned());

        let llm_temperature = match env::var(ENV_LLM_TEMPERATURE) {
            Ok(raw) => raw
                .trim()
                .parse::<f32>()
                .map_err(|error| SettingsEnvError::new(ENV_LLM_TEMPERATURE, error.to_string()))
                .and_then(|value| {
                    Temperature::new(value).map_err(|error| {
                        SettingsEnvError::new(ENV_LLM_TEMPERATURE, error.to_string())
                    })
                })?,
            Err(_) => Temperature::DEFAULT,
        };

        let llm_max_tokens = match env::var(ENV_LLM_MAX_TOKENS) {
            Ok(raw) => parse_env_number(ENV_LLM_MAX_TOKENS, &raw).and_then(|value| {
                MaxTokens::new(value)
                    .map_err(|error| SettingsEnvError::new(ENV_LLM_MAX_TOKENS, error.to_string()))
            })?,
            Err(_) => MaxTokens::DEFAULT,
        };

        Self::new(
            hashtags,
            post_limit,
            llm_model,
            llm_temperature,
            llm_max_tokens,
            DEFAULT_PROMPT_TEMPLATE,
        )
        .map_err(|error| SettingsEnvError::new(ENV_LLM_MODEL, error.to_string()))
    }

    /// Returns a copy with the update's present fields applied.
    ///
    /// The merged value is revalidated as a whole before being returned, so
    /// a partial update can never leave settings in an invalid state.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsValidationError`] when the merged settings violate
    /// an invariant (for example an empty hashtag list).
    pub fn apply(&self, update: SettingsUpdate) -> Result<Self, SettingsValidationError> {
        Self::new(
            update.hashtags.unwrap_or_else(|| self.hashtags.clone()),
            update.post_limit.unwrap_or(self.post_limit),
            update.llm_model.unwrap_or_else(|| self.llm_model.clone()),
            update.llm_temperature.unwrap_or(self.llm_temperature),
            update.llm_max_tokens.unwrap_or(self.llm_max_tokens),
            update
                .poll_prompt_template
                .unwrap_or_else(|| self.poll_prompt_template.clone()),
        )
    }

    /// Returns the monitored hashtags.
    #[must_use]
    pub fn hashtags(&self) -> &[Hashtag] {
        &self.hashtags
    }

    /// Returns the per-cycle post limit.
    #[must_use]
    pub const fn post_limit(&self) -> PostLimit {
        self.post_limit
    }

    /// Returns the language-model name.
    #[must_use]
    pub fn llm_model(&self) -> &str {
        &self.llm_model
    }

    /// Returns the sampling temperature.
    #[must_use]
    pub const fn llm_temperature(&self) -> Temperature {
        self.llm_temperature
    }

    /// Returns the completion token budget.
    #[must_use]
    pub const fn llm_max_tokens(&self) -> MaxTokens {
        self.llm_max_tokens
    }

    /// Returns the prompt template.
    #[must_use]
    pub fn poll_prompt_template(&self) -> &str {
        &self.poll_prompt_template
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            hashtags: vec![Hashtag::from_normalized(DEFAULT_HASHTAG.to_owned())],
            post_limit: PostLimit::DEFAULT,
            llm_model: DEFAULT_LLM_MODEL.to_owned(),
            llm_temperature: Temperature::DEFAULT,
            llm_max_tokens: MaxTokens::DEFAULT,
            poll_prompt_template: DEFAULT_PROMPT_TEMPLATE.to_owned(),
        }
    }
}

/// Partial update applied over the current settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    hashtags: Option<Vec<Hashtag>>,
    post_limit: Option<PostLimit>,
    llm_model: Option<String>,
    llm_temperature: Option<Temperature>,
    llm_max_tokens: Option<MaxTokens>,
    poll_prompt_template: Option<String>,
}

impl SettingsUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hashtag list.
    #[must_use]
    pub fn with_hashtags(mut self, hashtags: Vec<Hashtag>) -> Self {
        self.hashtags = Some(hashtags);
        self
    }

    /// Sets the per-cycle post limit.
    #[must_use]
    pub const fn with_post_limit(mut self, post_limit: PostLimit) -> Self {
        self.post_limit = Some(post_limit);
        self
    }

    /// Sets the language-model name.
    #[must_use]
    pub fn with_llm_model(mut self, llm_model: impl Into<String>) -> Self {
        self.llm_model = Some(llm_model.into());
        self
    }

    /// Sets the sampling temperature.
    #[must_use]
    pub const fn with_llm_temperature(mut self, llm_temperature: Temperature) -> Self {
        self.llm_temperature = Some(llm_temperature);
        self
    }

    /// Sets the completion token budget.
    #[must_use]
    pub const fn with_llm_max_tokens(mut self, llm_max_tokens: MaxTokens) -> Self {
        self.llm_max_tokens = Some(llm_max_tokens);
        self
    }

    /// Sets the prompt template.
    #[must_use]
    pub fn with_prompt_template(mut self, poll_prompt_template: impl Into<String>) -> Self {
        self.poll_prompt_template = Some(poll_prompt_template.into());
        self
    }
}

/// Parses a comma-separated hashtag list, skipping blank segments.
fn parse_hashtag_list(raw: &str) -> Result<Vec<Hashtag>, SettingsValidationError> {
    let mut hashtags = Vec::new();
    for segment in raw.split(',') {
        if segment.trim().is_empty() {
            continue;
        }
        hashtags.push(Hashtag::new(segment)?);
    }
    if hashtags.is_empty() {
        return Err(SettingsValidationError::NoHashtags);
    }
    Ok(hashtags)
}

/// Parses a numeric environment value.
fn parse_env_number(variable: &str, raw: &str) -> Result<u32, SettingsEnvError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|error| SettingsEnvError::new(variable, error.to_string()))
}
