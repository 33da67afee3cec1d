//! Queued units of work.

use crate::poll::domain::PollId;
use crate::settings::domain::{Hashtag, PostLimit};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier assigned to a job on enqueue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(Uuid);

impl JobId {
    /// Creates a new random job identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a job identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unit of work the worker can execute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Job {
    /// One fetch-plus-generation cycle, with optional setting overrides.
    RunCycle {
        /// Hashtags overriding the stored settings for this run only.
        hashtags: Option<Vec<Hashtag>>,
        /// Post limit overriding the stored settings for this run only.
        limit: Option<PostLimit>,
    },
    /// Publication of a single poll.
    PublishPoll {
        /// The poll to publish.
        poll_id: PollId,
    },
}

/// A job with the identity it was assigned on enqueue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedJob {
    id: JobId,
    job: Job,
}

impl QueuedJob {
    /// Pairs a job with its queue identity.
    #[must_use]
    pub const fn new(id: JobId, job: Job) -> Self {
        Self { id, job }
    }

    /// Returns the queue identity.
    #[must_use]
    pub const fn id(&self) -> JobId {
        self.id
    }

    /// Returns the unit of work.
    #[must_use]
    pub const fn job(&self) -> &Job {
        &self.job
    }

    /// Decomposes into identity and unit of work.
    #[must_use]
    pub fn into_parts(self) -> (JobId, Job) {
        (self.id, self.job)
    }
}
