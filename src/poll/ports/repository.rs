//! Repository port for poll persistence and status-indexed lookup.

use crate::poll::domain::{PollId, PollRecord, PollStatus, PostId};
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use thiserror::Error;

/// Result type for poll repository operations.
pub type PollRepositoryResult<T> = Result<T, PollRepositoryError>;

/// One page of a poll listing, ordered newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollPage {
    /// Records on this page.
    pub records: Vec<PollRecord>,
    /// Total number of records matching the filter, across all pages.
    pub total_count: usize,
}

/// Poll persistence contract.
///
/// All writes are whole-record replacement; callers read, mutate through
/// the domain guards, and `put` the result. Status index membership moves
/// with the record's status field as part of the same write: either both
/// land or neither does. Lookup by status costs O(size of that status
/// subset), not O(total records).
#[async_trait]
pub trait PollRepository: Send + Sync {
    /// Stores or replaces the record under its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PollRepositoryError::Persistence`] when the backing store
    /// fails; the previous record and index state remain in place.
    async fn put(&self, record: &PollRecord) -> PollRepositoryResult<()>;

    /// Fetches the record by identifier.
    ///
    /// Returns `None` when the identifier is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`PollRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn get(&self, id: PollId) -> PollRepositoryResult<Option<PollRecord>>;

    /// Removes the record and its index entry.
    ///
    /// # Errors
    ///
    /// Returns [`PollRepositoryError::NotFound`] for unknown identifiers
    /// and [`PollRepositoryError::PostedRetention`] for posted records,
    /// which are retained for audit even when a caller races the guard.
    async fn delete(&self, id: PollId) -> PollRepositoryResult<()>;

    /// Lists records newest first, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns [`PollRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn list(
        &self,
        status_filter: Option<PollStatus>,
        limit: usize,
        offset: usize,
    ) -> PollRepositoryResult<PollPage>;

    /// Returns the record count per status, including zero counts.
    ///
    /// # Errors
    ///
    /// Returns [`PollRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn count_by_status(&self) -> PollRepositoryResult<BTreeMap<PollStatus, usize>>;

    /// Records post identifiers as consumed by a generation cycle.
    ///
    /// Maintenance surface only: the cycle writes here but never consults
    /// the set for deduplication.
    ///
    /// # Errors
    ///
    /// Returns [`PollRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn mark_posts_used(&self, post_ids: &BTreeSet<PostId>) -> PollRepositoryResult<()>;

    /// Returns the post identifiers recorded as used.
    ///
    /// # Errors
    ///
    /// Returns [`PollRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn used_posts(&self) -> PollRepositoryResult<BTreeSet<PostId>>;

    /// Clears the used-post set.
    ///
    /// # Errors
    ///
    /// Returns [`PollRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn clear_used_posts(&self) -> PollRepositoryResult<()>;
}

/// Errors returned by poll repository implementations.
#[derive(Debug, Clone, Error)]
pub enum PollRepositoryError {
    /// The record was not found.
    #[error("poll not found: {0}")]
    NotFound(PollId),

    /// Posted records are retained for audit and cannot be deleted.
    #[error("poll {0} has been posted and cannot be deleted")]
    PostedRetention(PollId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PollRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
