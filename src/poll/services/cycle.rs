//! Cycle orchestrator: one fetch-plus-generation run as a single unit of
//! work.

use super::{
    fetch::FetchService,
    generation::{GenerationError, GenerationService},
};
use crate::poll::{
    domain::{PollId, PollRecord, PostId},
    ports::{LanguageModel, PollRepository, PollRepositoryError, SocialNetwork, UpstreamError},
};
use crate::settings::{
    domain::{Hashtag, PostLimit},
    ports::{SettingsRepository, SettingsRepositoryError},
};
use mockable::Clock;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Summary of one completed cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// Posts forwarded to the generation stage.
    pub posts_fetched: usize,
    /// Drafts persisted as PENDING records.
    pub drafts_created: usize,
    /// Model entries dropped at the parse boundary.
    pub drafts_rejected: usize,
    /// Identifiers of the created drafts, in response order.
    pub created_ids: Vec<PollId>,
}

/// Stage-level errors for a cycle run.
#[derive(Debug, Error)]
pub enum CycleError {
    /// The fetch stage failed; no posts were forwarded.
    #[error("fetch stage failed: {0}")]
    Fetch(#[source] UpstreamError),

    /// The generation stage failed; prior records are untouched.
    #[error("generation stage failed: {0}")]
    Generation(#[source] GenerationError),

    /// Loading settings failed.
    #[error(transparent)]
    Settings(#[from] SettingsRepositoryError),

    /// Recording used posts failed.
    #[error(transparent)]
    Repository(#[from] PollRepositoryError),
}

/// Orchestrates Fetch then Generation as one queued unit of work.
///
/// Settings are re-read from storage on every invocation so live edits
/// apply to the next cycle. Re-running simply creates additional drafts
/// from newer posts; no deduplication against earlier drafts is
/// performed.
#[derive(Clone)]
pub struct CycleService<S, L, R, G, C>
where
    S: SocialNetwork,
    L: LanguageModel,
    R: PollRepository,
    G: SettingsRepository,
    C: Clock + Send + Sync,
{
    fetch: FetchService<S>,
    generation: GenerationService<L, R, C>,
    repository: Arc<R>,
    settings: Arc<G>,
}

impl<S, L, R, G, C> CycleService<S, L, R, G, C>
where
    S: SocialNetwork,
    L: LanguageModel,
    R: PollRepository,
    G: SettingsRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new cycle orchestrator.
    #[must_use]
    pub const fn new(
        fetch: FetchService<S>,
        generation: GenerationService<L, R, C>,
        repository: Arc<R>,
        settings: Arc<G>,
    ) -> Self {
        Self {
            fetch,
            generation,
            repository,
            settings,
        }
    }

    /// Runs one cycle: fetch posts, generate drafts, record used posts.
    ///
    /// Call-site `hashtags`/`limit` override the stored settings for this
    /// run only.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError`] naming the failed stage; a failed stage is
    /// not retried within the same invocation.
    pub async fn run_cycle(
        &self,
        hashtags: Option<&[Hashtag]>,
        limit: Option<PostLimit>,
    ) -> Result<CycleReport, CycleError> {
        let settings = self.settings.load().await?.unwrap_or_default();
        let tags = hashtags.unwrap_or_else(|| settings.hashtags());
        let effective_limit = limit.unwrap_or_else(|| settings.post_limit());

        tracing::info!(hashtags = tags.len(), limit = %effective_limit, "cycle started");

        let posts = self
            .fetch
            .fetch(tags, effective_limit)
            .await
            .map_err(CycleError::Fetch)?;
        let outcome = self
            .generation
            .generate(&posts, &settings)
            .await
            .map_err(CycleError::Generation)?;

        let used: BTreeSet<PostId> = posts.iter().map(|post| post.id().clone()).collect();
        if !used.is_empty() {
            self.repository.mark_posts_used(&used).await?;
        }

        let report = CycleReport {
            posts_fetched: posts.len(),
            drafts_created: outcome.created.len(),
            drafts_rejected: outcome.rejections.len(),
            created_ids: outcome.created.iter().map(PollRecord::id).collect(),
        };
        tracing::info!(
            posts = report.posts_fetched,
            created = report.drafts_created,
            rejected = report.drafts_rejected,
            "cycle complete"
        );
        Ok(report)
    }
}
