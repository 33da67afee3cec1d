//! In-memory settings repository for tests and embedded use.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::settings::{
    domain::AppSettings,
    ports::{SettingsRepository, SettingsRepositoryError, SettingsRepositoryResult},
};

/// Thread-safe in-memory settings repository.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsRepository {
    state: Arc<RwLock<Option<AppSettings>>>,
}

impl InMemorySettingsRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn load(&self) -> SettingsRepositoryResult<Option<AppSettings>> {
        let state = self.state.read().map_err(|err| {
            SettingsRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.clone())
    }

    async fn save(&self, settings: &AppSettings) -> SettingsRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            SettingsRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        *state = Some(settings.clone());
        Ok(())
    }
}
