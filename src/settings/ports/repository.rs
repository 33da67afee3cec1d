//! Repository port for the single persisted settings record.

use crate::settings::domain::AppSettings;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for settings repository operations.
pub type SettingsRepositoryResult<T> = Result<T, SettingsRepositoryError>;

/// Settings persistence contract.
///
/// Exactly one settings record exists; `save` overwrites it wholesale.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Loads the stored settings.
    ///
    /// Returns `None` when no settings have been persisted yet.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsRepositoryError::Persistence`] when the backing
    /// store fails.
    async fn load(&self) -> SettingsRepositoryResult<Option<AppSettings>>;

    /// Replaces the stored settings.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsRepositoryError::Persistence`] when the backing
    /// store fails.
    async fn save(&self, settings: &AppSettings) -> SettingsRepositoryResult<()>;
}

/// Errors returned by settings repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SettingsRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SettingsRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
