//! Queue port for units of work.

use crate::queue::domain::{Job, JobId, QueuedJob};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for queue operations.
pub type JobQueueResult<T> = Result<T, JobQueueError>;

/// FIFO queue of units of work.
///
/// A claimed job is gone from the queue; execution-to-completion is the
/// worker's responsibility. Only jobs that have not been claimed yet can
/// be discarded.
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Appends a job and returns its assigned identity.
    ///
    /// # Errors
    ///
    /// Returns [`JobQueueError::Persistence`] when the backing queue
    /// fails.
    async fn enqueue(&self, job: Job) -> JobQueueResult<JobId>;

    /// Claims the oldest queued job, if any.
    ///
    /// # Errors
    ///
    /// Returns [`JobQueueError::Persistence`] when the backing queue
    /// fails.
    async fn claim(&self) -> JobQueueResult<Option<QueuedJob>>;

    /// Discards a not-yet-claimed job.
    ///
    /// Returns `false` when the job is unknown or was already claimed.
    ///
    /// # Errors
    ///
    /// Returns [`JobQueueError::Persistence`] when the backing queue
    /// fails.
    async fn discard(&self, id: JobId) -> JobQueueResult<bool>;

    /// Returns the number of jobs awaiting a claim.
    ///
    /// # Errors
    ///
    /// Returns [`JobQueueError::Persistence`] when the backing queue
    /// fails.
    async fn pending(&self) -> JobQueueResult<usize>;
}

/// Errors returned by queue implementations.
#[derive(Debug, Clone, Error)]
pub enum JobQueueError {
    /// Queue-layer failure.
    #[error("queue error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl JobQueueError {
    /// Wraps a queue-layer error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
