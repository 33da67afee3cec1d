//! Error types for poll domain validation and guard checks.

use super::{PollId, PollStatus};
use thiserror::Error;

/// Errors returned while constructing domain poll values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PollValidationError {
    /// The question is empty after trimming.
    #[error("poll question must not be empty")]
    EmptyQuestion,

    /// The question exceeds the character limit.
    #[error("poll question is {length} characters, limit is {limit}")]
    QuestionTooLong {
        /// Character count of the rejected question.
        length: usize,
        /// Maximum permitted character count.
        limit: usize,
    },

    /// An option text is empty after trimming.
    #[error("poll option text must not be empty")]
    EmptyOptionText,

    /// An option text exceeds the character limit.
    #[error("poll option is {length} characters, limit is {limit}")]
    OptionTextTooLong {
        /// Character count of the rejected option.
        length: usize,
        /// Maximum permitted character count.
        limit: usize,
    },

    /// The option count is outside the permitted range.
    #[error("poll has {count} options, expected between 2 and 4")]
    OptionCountOutOfRange {
        /// Number of options supplied.
        count: usize,
    },

    /// The poll duration is outside the permitted range.
    #[error("poll duration {hours}h outside supported range 1-168h")]
    DurationOutOfRange {
        /// Rejected duration in hours.
        hours: u32,
    },

    /// A source post identifier is empty.
    #[error("source post identifier must not be empty")]
    EmptyPostId,
}

/// Guard failures: the record's current status forbids the attempted
/// operation.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PollConflict {
    /// The requested status transition is not on the lifecycle graph.
    #[error("poll {poll_id}: illegal transition {from} -> {to}")]
    InvalidTransition {
        /// Record the transition was attempted on.
        poll_id: PollId,
        /// Status at the time of the attempt.
        from: PollStatus,
        /// Requested target status.
        to: PollStatus,
    },

    /// Question, options, or duration edits require a pending record.
    #[error("poll {poll_id} is {status}, only pending polls can be edited")]
    ContentLocked {
        /// Record the edit was attempted on.
        poll_id: PollId,
        /// Status at the time of the attempt.
        status: PollStatus,
    },

    /// Publishing requires an approved record or a failed retry candidate.
    #[error("poll {poll_id} is {status}, only approved or failed polls can be published")]
    NotPublishable {
        /// Record the publish was attempted on.
        poll_id: PollId,
        /// Status at the time of the attempt.
        status: PollStatus,
    },

    /// Posted polls are retained for audit and can never be deleted.
    #[error("poll {poll_id} has been posted and cannot be deleted")]
    PostedRetention {
        /// Record the delete was attempted on.
        poll_id: PollId,
    },
}

/// Error returned while parsing poll statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown poll status: {0}")]
pub struct ParsePollStatusError(pub String);
