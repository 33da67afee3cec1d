//! Strict parse boundary for language-model output.
//!
//! Model responses are untyped JSON; nothing crosses this boundary except
//! a fully validated [`PollDraft`] or a typed [`DraftRejection`]. A bad
//! entry rejects that entry only, never the batch.

use super::{DurationHours, OptionText, PollOptions, PollValidationError, QuestionText};
use serde_json::Value;
use thiserror::Error;

/// A validated poll draft parsed from one model response entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollDraft {
    question: QuestionText,
    options: PollOptions,
    duration_hours: DurationHours,
}

impl PollDraft {
    /// Assembles a draft from already-validated parts.
    #[must_use]
    pub const fn new(
        question: QuestionText,
        options: PollOptions,
        duration_hours: DurationHours,
    ) -> Self {
        Self {
            question,
            options,
            duration_hours,
        }
    }

    /// Validates one entry of the model's draft array.
    ///
    /// Accepted shape: an object with a string `question`, an array of
    /// string `options`, and an optional integer `duration_hours`. Any
    /// violation rejects this entry with a reason; other entries are
    /// unaffected.
    ///
    /// # Errors
    ///
    /// Returns a [`DraftRejection`] describing why the entry was dropped.
    pub fn from_entry(index: usize, entry: &Value) -> Result<Self, DraftRejection> {
        let object = entry
            .as_object()
            .ok_or_else(|| DraftRejection::new(index, DraftRejectionReason::NotAnObject))?;

        let question_raw = object
            .get("question")
            .and_then(Value::as_str)
            .ok_or_else(|| DraftRejection::new(index, DraftRejectionReason::MissingQuestion))?;
        let question = QuestionText::new(question_raw)
            .map_err(|error| DraftRejection::new(index, DraftRejectionReason::Invalid(error)))?;

        let option_values = object
            .get("options")
            .and_then(Value::as_array)
            .ok_or_else(|| DraftRejection::new(index, DraftRejectionReason::MissingOptions))?;
        let mut texts = Vec::with_capacity(option_values.len());
        for (position, option_value) in option_values.iter().enumerate() {
            let text_raw = option_value.as_str().ok_or_else(|| {
                DraftRejection::new(index, DraftRejectionReason::OptionNotAString { position })
            })?;
            let text = OptionText::new(text_raw).map_err(|error| {
                DraftRejection::new(index, DraftRejectionReason::Invalid(error))
            })?;
            texts.push(text);
        }
        let options = PollOptions::from_texts(texts)
            .map_err(|error| DraftRejection::new(index, DraftRejectionReason::Invalid(error)))?;

        let duration_hours = match object.get("duration_hours") {
            None | Some(Value::Null) => DurationHours::DEFAULT,
            Some(value) => {
                let hours = value
                    .as_u64()
                    .and_then(|raw| u32::try_from(raw).ok())
                    .ok_or_else(|| {
                        DraftRejection::new(index, DraftRejectionReason::InvalidDuration)
                    })?;
                DurationHours::new(hours).map_err(|error| {
                    DraftRejection::new(index, DraftRejectionReason::Invalid(error))
                })?
            }
        };

        Ok(Self::new(question, options, duration_hours))
    }

    /// Returns the draft question.
    #[must_use]
    pub const fn question(&self) -> &QuestionText {
        &self.question
    }

    /// Returns the draft options.
    #[must_use]
    pub const fn options(&self) -> &PollOptions {
        &self.options
    }

    /// Returns the draft duration.
    #[must_use]
    pub const fn duration_hours(&self) -> DurationHours {
        self.duration_hours
    }

    /// Decomposes the draft into its parts.
    #[must_use]
    pub fn into_parts(self) -> (QuestionText, PollOptions, DurationHours) {
        (self.question, self.options, self.duration_hours)
    }
}

/// One dropped entry from a model response, with the position it held.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("draft entry {index}: {reason}")]
pub struct DraftRejection {
    /// Zero-based position of the entry in the response array.
    pub index: usize,
    /// Why the entry was dropped.
    pub reason: DraftRejectionReason,
}

impl DraftRejection {
    /// Creates a rejection for the entry at `index`.
    #[must_use]
    pub const fn new(index: usize, reason: DraftRejectionReason) -> Self {
        Self { index, reason }
    }
}

/// Reasons a model response entry fails the parse boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftRejectionReason {
    /// The entry is not a JSON object.
    #[error("not a JSON object")]
    NotAnObject,

    /// The entry has no string `question` member.
    #[error("missing or non-string question")]
    MissingQuestion,

    /// The entry has no array `options` member.
    #[error("missing or non-array options")]
    MissingOptions,

    /// An options array element is not a string.
    #[error("option at position {position} is not a string")]
    OptionNotAString {
        /// Zero-based position within the options array.
        position: usize,
    },

    /// The `duration_hours` member is not a non-negative integer.
    #[error("duration_hours is not a non-negative integer")]
    InvalidDuration,

    /// The entry's content violates a poll invariant.
    #[error(transparent)]
    Invalid(#[from] PollValidationError),
}

/// Locates the draft array inside a decoded model response.
///
/// Accepts a top-level array, an object with a `polls` array member, or
/// an object whose first array-valued member is taken as the draft list.
#[must_use]
pub fn entries_from_response(response: &Value) -> Option<&Vec<Value>> {
    match response {
        Value::Array(entries) => Some(entries),
        Value::Object(members) => members
            .get("polls")
            .and_then(Value::as_array)
            .or_else(|| members.values().find_map(Value::as_array)),
        _ => None,
    }
}
