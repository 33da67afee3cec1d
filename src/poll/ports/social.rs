//! Capability port for the social network.

use super::upstream::UpstreamResult;
use crate::poll::domain::{DurationHours, PollOptions, PostSummary, PublishedPollRef, QuestionText};
use crate::settings::domain::{Hashtag, PostLimit};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// Social-network operations the lifecycle engine depends on.
///
/// Implementations wrap the concrete network client (an external
/// collaborator) and enforce per-call timeouts themselves.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SocialNetwork: Send + Sync {
    /// Retrieves recent posts matching the given hashtags.
    ///
    /// The same post may appear under several hashtags; deduplication is
    /// the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`super::UpstreamError`] when the network call fails.
    async fn search_posts(
        &self,
        hashtags: &[Hashtag],
        limit: PostLimit,
    ) -> UpstreamResult<Vec<PostSummary>>;

    /// Creates a poll post on the network and returns its references.
    ///
    /// # Errors
    ///
    /// Returns [`super::UpstreamError`] when the network call fails.
    async fn create_poll(
        &self,
        question: &QuestionText,
        options: &PollOptions,
        duration: DurationHours,
    ) -> UpstreamResult<PublishedPollRef>;
}
