//! Poll options and the 2-4 length invariant.

use super::{OptionText, PollValidationError};
use serde::{Deserialize, Serialize};

/// A single answer option with its running vote count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    text: OptionText,
    vote_count: u32,
}

impl PollOption {
    /// Creates a fresh option with zero votes.
    #[must_use]
    pub const fn new(text: OptionText) -> Self {
        Self {
            text,
            vote_count: 0,
        }
    }

    /// Returns the option text.
    #[must_use]
    pub const fn text(&self) -> &OptionText {
        &self.text
    }

    /// Returns the recorded vote count.
    #[must_use]
    pub const fn vote_count(&self) -> u32 {
        self.vote_count
    }
}

/// Ordered option collection; always holds between 2 and 4 entries.
///
/// The length invariant is enforced at construction, so any held
/// `PollOptions` value is valid. Whole-collection replacement is the only
/// mutation, which keeps the invariant intact across edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PollOptions(Vec<PollOption>);

impl PollOptions {
    /// Smallest permitted option count.
    pub const MIN: usize = 2;
    /// Largest permitted option count.
    pub const MAX: usize = 4;

    /// Creates a validated option collection.
    ///
    /// # Errors
    ///
    /// Returns [`PollValidationError::OptionCountOutOfRange`] when the
    /// collection holds fewer than 2 or more than 4 entries.
    pub fn new(options: Vec<PollOption>) -> Result<Self, PollValidationError> {
        if options.len() < Self::MIN || options.len() > Self::MAX {
            return Err(PollValidationError::OptionCountOutOfRange {
                count: options.len(),
            });
        }
        Ok(Self(options))
    }

    /// Creates a collection of fresh zero-vote options from texts.
    ///
    /// # Errors
    ///
    /// Returns [`PollValidationError::OptionCountOutOfRange`] when the
    /// text count falls outside `2..=4`.
    pub fn from_texts(
        texts: impl IntoIterator<Item = OptionText>,
    ) -> Result<Self, PollValidationError> {
        Self::new(texts.into_iter().map(PollOption::new).collect())
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the invariant guarantees at least two entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the options as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[PollOption] {
        &self.0
    }

    /// Iterates over the options in order.
    pub fn iter(&self) -> std::slice::Iter<'_, PollOption> {
        self.0.iter()
    }
}

impl TryFrom<Vec<PollOption>> for PollOptions {
    type Error = PollValidationError;

    fn try_from(options: Vec<PollOption>) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}

impl<'a> IntoIterator for &'a PollOptions {
    type Item = &'a PollOption;
    type IntoIter = std::slice::Iter<'a, PollOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for PollOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let options = Vec::<PollOption>::deserialize(deserializer)?;
        Self::new(options).map_err(serde::de::Error::custom)
    }
}
