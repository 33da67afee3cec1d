//! Generation stage: turns fetched posts into pending poll drafts via the
//! language model.

use crate::poll::{
    domain::{entries_from_response, DraftRejection, PollDraft, PollRecord, PostSummary},
    ports::{
        CompletionRequest, LanguageModel, PollRepository, PollRepositoryError, UpstreamError,
    },
};
use crate::settings::domain::AppSettings;
use minijinja::Environment;
use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Result of one generation run: what persisted and what was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    /// Records persisted as PENDING drafts, in response order.
    pub created: Vec<PollRecord>,
    /// Entries dropped at the parse boundary, with reasons.
    pub rejections: Vec<DraftRejection>,
}

/// Stage-level errors for draft generation.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The model call itself failed; zero records were written.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// The configured prompt template failed to render.
    #[error("prompt template rendering failed: {0}")]
    Template(String),

    /// Persisting an accepted draft failed.
    #[error(transparent)]
    Repository(#[from] PollRepositoryError),
}

/// Generation stage over the language-model capability.
#[derive(Clone)]
pub struct GenerationService<L, R, C>
where
    L: LanguageModel,
    R: PollRepository,
    C: Clock + Send + Sync,
{
    model: Arc<L>,
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<L, R, C> GenerationService<L, R, C>
where
    L: LanguageModel,
    R: PollRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new generation service.
    #[must_use]
    pub const fn new(model: Arc<L>, repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            model,
            repository,
            clock,
        }
    }

    /// Generates poll drafts from the forwarded posts and persists each
    /// accepted entry as a PENDING record.
    ///
    /// The response is parsed defensively: an unusable response fails the
    /// stage, while an invalid entry rejects that entry only and valid
    /// entries still persist.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the template, the model call, or
    /// persistence fails.
    pub async fn generate(
        &self,
        posts: &[PostSummary],
        settings: &AppSettings,
    ) -> Result<GenerationOutcome, GenerationError> {
        let prompt = render_prompt(settings.poll_prompt_template(), posts)?;
        let request = CompletionRequest::new(
            prompt,
            settings.llm_model(),
            settings.llm_temperature(),
            settings.llm_max_tokens(),
        );

        let response_text = self.model.complete(&request).await?;
        let response: Value = serde_json::from_str(&response_text).map_err(|error| {
            GenerationError::Upstream(UpstreamError::MalformedResponse(error.to_string()))
        })?;
        let entries = entries_from_response(&response).ok_or_else(|| {
            GenerationError::Upstream(UpstreamError::MalformedResponse(
                "no draft array in response".to_owned(),
            ))
        })?;

        let source_ids = posts.iter().map(|post| post.id().clone());
        let mut outcome = GenerationOutcome {
            created: Vec::new(),
            rejections: Vec::new(),
        };
        for (index, entry) in entries.iter().enumerate() {
            match PollDraft::from_entry(index, entry) {
                Ok(draft) => {
                    let record = PollRecord::new_draft(draft, source_ids.clone(), &*self.clock);
                    self.repository.put(&record).await?;
                    outcome.created.push(record);
                }
                Err(rejection) => {
                    tracing::debug!(%rejection, "dropped draft entry");
                    outcome.rejections.push(rejection);
                }
            }
        }

        tracing::info!(
            created = outcome.created.len(),
            rejected = outcome.rejections.len(),
            "generation run complete"
        );
        Ok(outcome)
    }
}

/// Renders the prompt template with a numbered digest of the posts.
fn render_prompt(template: &str, posts: &[PostSummary]) -> Result<String, GenerationError> {
    let mut digest = String::new();
    for (index, post) in posts.iter().enumerate() {
        if index > 0 {
            digest.push_str("\n\n");
        }
        digest.push_str(&format!(
            "Post {} by @{}:\n{}",
            index + 1,
            post.author(),
            post.text()
        ));
    }

    let environment = Environment::new();
    environment
        .render_str(template, minijinja::context! { posts => digest })
        .map_err(|error| GenerationError::Template(error.to_string()))
}
