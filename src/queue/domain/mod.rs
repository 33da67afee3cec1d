//! Domain model for queued units of work.

mod job;

pub use job::{Job, JobId, QueuedJob};
