//! Failure taxonomy for external capability calls.

use thiserror::Error;

/// Result type for capability operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// External API failure, classified for routing and reporting.
///
/// Capability adapters translate their client errors into these variants;
/// nothing upstream-specific leaks past the port boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UpstreamError {
    /// Credentials are missing, expired, or rejected.
    #[error("upstream authentication failed: {0}")]
    Auth(String),

    /// The upstream service throttled the request.
    #[error("upstream rate limit exceeded: {0}")]
    RateLimit(String),

    /// Transport-level failure reaching the upstream service.
    #[error("upstream network failure: {0}")]
    Network(String),

    /// The upstream service answered with an unusable payload.
    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),
}
