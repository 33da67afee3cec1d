//! Fetch stage: retrieves and normalizes recent posts for the monitored
//! hashtags.

use crate::poll::{
    domain::{PostId, PostSummary},
    ports::{SocialNetwork, UpstreamError},
};
use crate::settings::domain::{Hashtag, PostLimit};
use std::collections::HashSet;
use std::sync::Arc;

/// Hard cap on the number of posts forwarded to the generation stage,
/// bounding language-model cost regardless of the configured limit.
pub const FORWARDED_POST_CAP: usize = 50;

/// Fetch stage over the social-network capability.
#[derive(Clone)]
pub struct FetchService<S>
where
    S: SocialNetwork,
{
    social: Arc<S>,
}

impl<S> FetchService<S>
where
    S: SocialNetwork,
{
    /// Creates a new fetch service.
    #[must_use]
    pub const fn new(social: Arc<S>) -> Self {
        Self { social }
    }

    /// Retrieves recent posts for the hashtags, deduplicated by post
    /// identifier, truncated to `limit`, and capped at
    /// [`FORWARDED_POST_CAP`].
    ///
    /// A failure produces no partial output.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] when the network call fails.
    pub async fn fetch(
        &self,
        hashtags: &[Hashtag],
        limit: PostLimit,
    ) -> Result<Vec<PostSummary>, UpstreamError> {
        let fetched = self.social.search_posts(hashtags, limit).await?;
        let fetched_count = fetched.len();

        let mut seen: HashSet<PostId> = HashSet::new();
        let forwarded: Vec<PostSummary> = fetched
            .into_iter()
            .filter(|post| seen.insert(post.id().clone()))
            .take(usize::try_from(limit.value()).unwrap_or(usize::MAX))
            .take(FORWARDED_POST_CAP)
            .collect();

        tracing::info!(
            hashtags = hashtags.len(),
            fetched = fetched_count,
            forwarded = forwarded.len(),
            "fetched posts for generation"
        );
        Ok(forwarded)
    }
}
