//! Publish stage: turns an approved record into a network poll post.

use crate::poll::{
    domain::{PollConflict, PollId, PollRecord},
    ports::{PollRepository, PollRepositoryError, SocialNetwork},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Result of a publish attempt that reached the external call.
///
/// A failed external call is an outcome, not an error: the record has
/// moved to FAILED and stays actionable in the moderation listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The poll was created on the network; the record is POSTED.
    Posted(PollRecord),
    /// The external call failed; the record is FAILED and may be retried.
    Failed {
        /// The record after the failure was recorded.
        record: PollRecord,
        /// Why the external call failed.
        error: String,
    },
}

/// Service-level errors for publish operations.
#[derive(Debug, Error)]
pub enum PublishError {
    /// No record exists under the identifier.
    #[error("poll not found: {0}")]
    NotFound(PollId),

    /// The record's current status forbids publishing; nothing was sent.
    #[error(transparent)]
    Conflict(#[from] PollConflict),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(PollRepositoryError),
}

impl From<PollRepositoryError> for PublishError {
    fn from(err: PollRepositoryError) -> Self {
        match err {
            PollRepositoryError::NotFound(id) => Self::NotFound(id),
            PollRepositoryError::PostedRetention(id) => {
                Self::Conflict(PollConflict::PostedRetention { poll_id: id })
            }
            other @ PollRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Publish stage over the social-network capability.
#[derive(Clone)]
pub struct PublishService<R, S, C>
where
    R: PollRepository,
    S: SocialNetwork,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    social: Arc<S>,
    clock: Arc<C>,
}

impl<R, S, C> PublishService<R, S, C>
where
    R: PollRepository,
    S: SocialNetwork,
    C: Clock + Send + Sync,
{
    /// Creates a new publish service.
    #[must_use]
    pub const fn new(repository: Arc<R>, social: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            repository,
            social,
            clock,
        }
    }

    /// Publishes the poll, re-reading current state first.
    ///
    /// The guard re-check at the top of this read-modify-write is what
    /// makes concurrent publishes of the same id safe: once one attempt
    /// records POSTED, the other re-reads that status and conflicts
    /// without a second external call.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::NotFound`] for unknown identifiers or
    /// [`PublishError::Conflict`] when the record is neither approved nor
    /// a failed retry candidate (no external call is made).
    pub async fn publish(&self, id: PollId) -> Result<PublishOutcome, PublishError> {
        let mut record = self
            .repository
            .get(id)
            .await?
            .ok_or(PublishError::NotFound(id))?;
        record.ensure_publishable()?;

        let created = self
            .social
            .create_poll(record.question(), record.options(), record.duration_hours())
            .await;

        match created {
            Ok(published) => {
                record.record_publish_success(published, &*self.clock)?;
                self.repository.put(&record).await?;
                tracing::info!(poll_id = %id, "poll published");
                Ok(PublishOutcome::Posted(record))
            }
            Err(upstream) => {
                let reason = upstream.to_string();
                record.record_publish_failure(reason.clone(), &*self.clock)?;
                self.repository.put(&record).await?;
                tracing::warn!(poll_id = %id, error = %reason, "poll publish failed");
                Ok(PublishOutcome::Failed {
                    record,
                    error: reason,
                })
            }
        }
    }
}
