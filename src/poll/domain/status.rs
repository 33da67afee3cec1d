//! Poll lifecycle status and transition rules.

use super::ParsePollStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Poll lifecycle status.
///
/// Transitions are monotonic along the lifecycle graph: a record never
/// regresses to [`PollStatus::Pending`], and [`PollStatus::Rejected`] and
/// [`PollStatus::Posted`] have no exits. [`PollStatus::Failed`] is not
/// terminal; a failed publish may be retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PollStatus {
    /// Draft awaiting a moderation decision.
    Pending,
    /// Approved by a moderator, awaiting publication.
    Approved,
    /// Rejected by a moderator.
    Rejected,
    /// Successfully published to the social network.
    Posted,
    /// The most recent publish attempt failed; eligible for retry.
    Failed,
}

impl PollStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Approved,
        Self::Rejected,
        Self::Posted,
        Self::Failed,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Posted => "posted",
            Self::Failed => "failed",
        }
    }

    /// Returns whether the lifecycle graph permits the transition.
    #[must_use]
    pub const fn can_transition_to(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Pending, Self::Approved | Self::Rejected)
                | (Self::Approved | Self::Failed, Self::Posted | Self::Failed)
        )
    }

    /// Returns whether the status has no outgoing transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Posted)
    }

    /// Returns whether question, options, and duration may still change.
    #[must_use]
    pub const fn allows_content_edits(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns whether a publish attempt is permitted.
    #[must_use]
    pub const fn is_publishable(self) -> bool {
        matches!(self, Self::Approved | Self::Failed)
    }
}

impl TryFrom<&str> for PollStatus {
    type Error = ParsePollStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "posted" => Ok(Self::Posted),
            "failed" => Ok(Self::Failed),
            _ => Err(ParsePollStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for PollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
