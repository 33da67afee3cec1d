//! Mutex-guarded FIFO queue for tests and embedded use.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::queue::{
    domain::{Job, JobId, QueuedJob},
    ports::{JobQueue, JobQueueError, JobQueueResult},
};

/// Thread-safe in-memory job queue.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJobQueue {
    state: Arc<Mutex<VecDeque<QueuedJob>>>,
}

impl InMemoryJobQueue {
    /// Creates an empty in-memory queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> JobQueueError {
    JobQueueError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl JobQueue for InMemoryJobQueue {
    async fn enqueue(&self, job: Job) -> JobQueueResult<JobId> {
        let mut state = self.state.lock().map_err(lock_poisoned)?;
        let id = JobId::new();
        state.push_back(QueuedJob::new(id, job));
        Ok(id)
    }

    async fn claim(&self) -> JobQueueResult<Option<QueuedJob>> {
        let mut state = self.state.lock().map_err(lock_poisoned)?;
        Ok(state.pop_front())
    }

    async fn discard(&self, id: JobId) -> JobQueueResult<bool> {
        let mut state = self.state.lock().map_err(lock_poisoned)?;
        let before = state.len();
        state.retain(|queued| queued.id() != id);
        Ok(state.len() < before)
    }

    async fn pending(&self) -> JobQueueResult<usize> {
        let state = self.state.lock().map_err(lock_poisoned)?;
        Ok(state.len())
    }
}
