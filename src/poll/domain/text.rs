//! Validated text and duration scalars for poll content.
//!
//! Limits mirror what the social network accepts for poll posts: 100
//! characters for the question, 50 per option, and a lifetime between one
//! hour and seven days.

use super::PollValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Poll question limited to 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionText(String);

impl QuestionText {
    /// Maximum permitted question length in characters.
    pub const MAX_CHARS: usize = 100;

    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns [`PollValidationError::EmptyQuestion`] for blank input or
    /// [`PollValidationError::QuestionTooLong`] past the character limit.
    pub fn new(value: impl Into<String>) -> Result<Self, PollValidationError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(PollValidationError::EmptyQuestion);
        }
        let length = normalized.chars().count();
        if length > Self::MAX_CHARS {
            return Err(PollValidationError::QuestionTooLong {
                length,
                limit: Self::MAX_CHARS,
            });
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the question as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for QuestionText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for QuestionText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Poll option text limited to 50 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionText(String);

impl OptionText {
    /// Maximum permitted option length in characters.
    pub const MAX_CHARS: usize = 50;

    /// Creates a validated option text.
    ///
    /// # Errors
    ///
    /// Returns [`PollValidationError::EmptyOptionText`] for blank input or
    /// [`PollValidationError::OptionTextTooLong`] past the character limit.
    pub fn new(value: impl Into<String>) -> Result<Self, PollValidationError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(PollValidationError::EmptyOptionText);
        }
        let length = normalized.chars().count();
        if length > Self::MAX_CHARS {
            return Err(PollValidationError::OptionTextTooLong {
                length,
                limit: Self::MAX_CHARS,
            });
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the option text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OptionText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for OptionText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Poll lifetime in hours, between one hour and seven days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationHours(u32);

impl DurationHours {
    /// Shortest permitted lifetime.
    pub const MIN: u32 = 1;
    /// Longest permitted lifetime (seven days).
    pub const MAX: u32 = 168;
    /// Lifetime applied to generated drafts that specify none.
    pub const DEFAULT: Self = Self(24);

    /// Creates a validated duration.
    ///
    /// # Errors
    ///
    /// Returns [`PollValidationError::DurationOutOfRange`] when the value
    /// falls outside `1..=168`.
    pub const fn new(hours: u32) -> Result<Self, PollValidationError> {
        if hours < Self::MIN || hours > Self::MAX {
            return Err(PollValidationError::DurationOutOfRange { hours });
        }
        Ok(Self(hours))
    }

    /// Returns the duration in hours.
    #[must_use]
    pub const fn hours(self) -> u32 {
        self.0
    }
}

impl Default for DurationHours {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for DurationHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.0)
    }
}
