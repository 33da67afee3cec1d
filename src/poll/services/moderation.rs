//! Moderation gate: the mutation surface exposed to the API layer.
//!
//! Every operation is a read-modify-write against current storage state;
//! the domain guards decide whether the mutation is permitted. Concurrent
//! moderation of one record is last-write-wins: the second writer's guard
//! check runs against the first writer's result and fails with a conflict.

use crate::poll::{
    domain::{ModerationDecision, PollConflict, PollId, PollRecord, PollStatus, PollUpdate},
    ports::{PollPage, PollRepository, PollRepositoryError},
};
use mockable::Clock;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Poll counts per status plus the overall total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollStats {
    /// Record count per status, including zero counts.
    pub by_status: BTreeMap<PollStatus, usize>,
    /// Total record count.
    pub total: usize,
}

/// Service-level errors for moderation operations.
#[derive(Debug, Error)]
pub enum ModerationError {
    /// No record exists under the identifier.
    #[error("poll not found: {0}")]
    NotFound(PollId),

    /// The record's current status forbids the operation.
    #[error(transparent)]
    Conflict(#[from] PollConflict),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(PollRepositoryError),
}

impl From<PollRepositoryError> for ModerationError {
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

/// Result type for moderation operations.
pub type ModerationResult<T> = Result<T, ModerationError>;

/// Moderation gate service.
#[derive(Clone)]
pub struct ModerationService<R, C>
where
    R: PollRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ModerationService<R, C>
where
    R: PollRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new moderation service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Fetches a record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ModerationError::NotFound`] for unknown identifiers.
    pub async fn get(&self, id: PollId) -> ModerationResult<PollRecord> {
        self.repository
            .get(id)
            .await?
            .ok_or(ModerationError::NotFound(id))
    }

    /// Lists records newest first, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns [`ModerationError::Repository`] when the listing fails.
    pub async fn list(
        &self,
        status_filter: Option<PollStatus>,
        limit: usize,
        offset: usize,
    ) -> ModerationResult<PollPage> {
        Ok(self.repository.list(status_filter, limit, offset).await?)
    }

    /// Returns per-status counts and the total.
    ///
    /// # Errors
    ///
    /// Returns [`ModerationError::Repository`] when counting fails.
    pub async fn stats(&self) -> ModerationResult<PollStats> {
        let by_status = self.repository.count_by_status().await?;
        let total = by_status.values().sum();
        Ok(PollStats { by_status, total })
    }

    /// Applies a content edit to a pending record.
    ///
    /// # Errors
    ///
    /// Returns [`ModerationError::NotFound`] for unknown identifiers or
    /// [`ModerationError::Conflict`] when the record is no longer pending;
    /// the stored record is unchanged on error.
    pub async fn update(&self, id: PollId, update: PollUpdate) -> ModerationResult<PollRecord> {
        let mut record = self.get(id).await?;
        record.apply_update(update, &*self.clock)?;
        self.repository.put(&record).await?;
        tracing::info!(poll_id = %id, "poll content updated");
        Ok(record)
    }

    /// Applies a moderation decision, with any accompanying edits, as a
    /// single write.
    ///
    /// # Errors
    ///
    /// Returns [`ModerationError::NotFound`] for unknown identifiers or
    /// [`ModerationError::Conflict`] when the record has already left
    /// PENDING (for example the losing side of a double-approve race).
    pub async fn decide(
        &self,
        id: PollId,
        decision: ModerationDecision,
    ) -> ModerationResult<PollRecord> {
        let verdict = decision.verdict();
        let mut record = self.get(id).await?;
        record.decide(decision, &*self.clock)?;
        self.repository.put(&record).await?;
        tracing::info!(poll_id = %id, ?verdict, "poll moderated");
        Ok(record)
    }

    /// Deletes a record; posted records are retained for audit.
    ///
    /// # Errors
    ///
    /// Returns [`ModerationError::NotFound`] for unknown identifiers or
    /// [`ModerationError::Conflict`] for posted records.
    pub async fn delete(&self, id: PollId) -> ModerationResult<()> {
        let record = self.get(id).await?;
        record.ensure_deletable()?;
        self.repository.delete(id).await?;
        tracing::info!(poll_id = %id, "poll deleted");
        Ok(())
    }
}
