//! `PostgreSQL` repository implementation for settings storage.

use super::{
    models::{NewSettingsRow, SettingsRow},
    schema::app_settings,
};
use crate::settings::{
    domain::AppSettings,
    ports::{SettingsRepository, SettingsRepositoryError, SettingsRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by settings adapters.
pub type SettingsPgPool = Pool<ConnectionManager<PgConnection>>;

/// Identifier of the single persisted settings row.
const SETTINGS_ROW_ID: i32 = 1;

/// `PostgreSQL`-backed settings repository.
#[derive(Debug, Clone)]
pub struct PostgresSettingsRepository {
    pool: SettingsPgPool,
}

impl PostgresSettingsRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: SettingsPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> SettingsRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> SettingsRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(SettingsRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(SettingsRepositoryError::persistence)?
    }
}

#[async_trait]
impl SettingsRepository for PostgresSettingsRepository {
    async fn load(&self) -> SettingsRepositoryResult<Option<AppSettings>> {
        self.run_blocking(|connection| {
            let row = app_settings::table
                .filter(app_settings::id.eq(SETTINGS_ROW_ID))
                .select(SettingsRow::as_select())
                .first::<SettingsRow>(connection)
                .optional()
                .map_err(SettingsRepositoryError::persistence)?;
            row.map(|found| {
                serde_json::from_value::<AppSettings>(found.payload)
                    .map_err(SettingsRepositoryError::persistence)
            })
            .transpose()
        })
        .await
    }

    async fn save(&self, settings: &AppSettings) -> SettingsRepositoryResult<()> {
        let payload =
            serde_json::to_value(settings).map_err(SettingsRepositoryError::persistence)?;
        self.run_blocking(move |connection| {
            let row = NewSettingsRow {
                id: SETTINGS_ROW_ID,
                payload,
            };
            diesel::insert_into(app_settings::table)
                .values(&row)
                .on_conflict(app_settings::id)
                .do_update()
                .set(&row)
                .execute(connection)
                .map_err(SettingsRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}
