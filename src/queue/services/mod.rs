//! Service layer for job execution.

pub mod worker;

pub use worker::{CompletedJob, JobOutcome, JobWorker};
