//! Port contracts for the job queue.

pub mod queue;

pub use queue::{JobQueue, JobQueueError, JobQueueResult};
