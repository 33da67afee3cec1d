//! Validated scalar types for settings values.

use super::SettingsValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized hashtag monitored by the fetch stage.
///
/// Stored canonically without the leading `#`; a single leading `#` is
/// stripped during construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hashtag(String);

impl Hashtag {
    /// Creates a validated hashtag.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsValidationError::InvalidHashtag`] when the value is
    /// empty after trimming or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, SettingsValidationError> {
        let raw = value.into();
        let normalized = raw.trim().trim_start_matches('#');
        if normalized.is_empty() || normalized.chars().any(char::is_whitespace) {
            return Err(SettingsValidationError::InvalidHashtag(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Wraps a value already known to satisfy the hashtag invariants.
    pub(crate) const fn from_normalized(value: String) -> Self {
        Self(value)
    }

    /// Returns the tag without the leading `#`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Hashtag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Hashtag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Maximum number of posts fetched per cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostLimit(u32);

impl PostLimit {
    /// Smallest accepted post limit.
    pub const MIN: u32 = 10;
    /// Largest accepted post limit.
    pub const MAX: u32 = 500;
    /// Limit applied when no configuration is present.
    pub const DEFAULT: Self = Self(100);

    /// Creates a validated post limit.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsValidationError::PostLimitOutOfRange`] when the
    /// value falls outside `10..=500`.
    pub const fn new(value: u32) -> Result<Self, SettingsValidationError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(SettingsValidationError::PostLimitOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Default for PostLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PostLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sampling temperature passed to the language model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Temperature(f32);

impl Temperature {
    /// Temperature applied when no configuration is present.
    pub const DEFAULT: Self = Self(0.7);

    /// Creates a validated temperature.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsValidationError::TemperatureOutOfRange`] when the
    /// value falls outside `0.0..=2.0` or is not finite.
    pub fn new(value: f32) -> Result<Self, SettingsValidationError> {
        if !value.is_finite() || value < 0.0 || value > 2.0 {
            return Err(SettingsValidationError::TemperatureOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Completion token budget passed to the language model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaxTokens(u32);

impl MaxTokens {
    /// Smallest accepted token budget.
    pub const MIN: u32 = 100;
    /// Largest accepted token budget.
    pub const MAX: u32 = 4000;
    /// Budget applied when no configuration is present.
    pub const DEFAULT: Self = Self(1500);

    /// Creates a validated token budget.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsValidationError::MaxTokensOutOfRange`] when the
    /// value falls outside `100..=4000`.
    pub const fn new(value: u32) -> Result<Self, SettingsValidationError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(SettingsValidationError::MaxTokensOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Default for MaxTokens {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for MaxTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
