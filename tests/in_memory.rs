//! In-memory integration tests for the poll lifecycle.
//!
//! Tests are organized into modules by functionality:
//! - `lifecycle_tests`: Draft through moderation to publication and audit
//!   retention
//! - `generation_flow_tests`: Cycle runs against scripted model output
//! - `publish_retry_tests`: Publish failure, retained error context, retry

mod in_memory {
    pub mod helpers;

    mod generation_flow_tests;
    mod lifecycle_tests;
    mod publish_retry_tests;
}
