//! Runtime settings orchestration: environment bootstrap, reads, and
//! wholesale updates.

use crate::settings::{
    domain::{AppSettings, SettingsEnvError, SettingsUpdate, SettingsValidationError},
    ports::{SettingsRepository, SettingsRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for settings operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The merged settings violate a domain invariant.
    #[error(transparent)]
    Validation(#[from] SettingsValidationError),
    /// An environment variable holds an unusable value.
    #[error(transparent)]
    Environment(#[from] SettingsEnvError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] SettingsRepositoryError),
}

/// Result type for settings service operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Settings orchestration service.
#[derive(Clone)]
pub struct SettingsService<R>
where
    R: SettingsRepository,
{
    repository: Arc<R>,
}

impl<R> SettingsService<R>
where
    R: SettingsRepository,
{
    /// Creates a new settings service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Seeds storage from the environment when no settings exist yet.
    ///
    /// Returns the stored settings unchanged when a record is already
    /// present, so runtime edits survive restarts.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Environment`] for unusable environment
    /// values or [`SettingsError::Repository`] when persistence fails.
    pub async fn bootstrap_from_env(&self) -> SettingsResult<AppSettings> {
        if let Some(existing) = self.repository.load().await? {
            return Ok(existing);
        }
        let defaults = AppSettings::from_env()?;
        self.repository.save(&defaults).await?;
        Ok(defaults)
    }

    /// Returns the current settings, falling back to compiled-in defaults
    /// when nothing has been persisted.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Repository`] when the load fails.
    pub async fn get(&self) -> SettingsResult<AppSettings> {
        Ok(self.repository.load().await?.unwrap_or_default())
    }

    /// Applies a partial update and persists the merged settings wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Validation`] when the merged settings are
    /// invalid (nothing is written) or [`SettingsError::Repository`] when
    /// persistence fails.
    pub async fn update(&self, update: SettingsUpdate) -> SettingsResult<AppSettings> {
        let current = self.repository.load().await?.unwrap_or_default();
        let merged = current.apply(update)?;
        self.repository.save(&merged).await?;
        Ok(merged)
    }
}
