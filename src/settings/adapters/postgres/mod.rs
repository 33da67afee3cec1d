//! `PostgreSQL` adapter for settings persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresSettingsRepository, SettingsPgPool};
