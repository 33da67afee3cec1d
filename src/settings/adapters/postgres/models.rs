//! Diesel row models for settings persistence.

use super::schema::app_settings;
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for the settings record.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = app_settings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SettingsRow {
    /// Fixed row identifier.
    pub id: i32,
    /// Serialized settings payload.
    pub payload: Value,
}

/// Insert model for the settings record.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = app_settings)]
pub struct NewSettingsRow {
    /// Fixed row identifier.
    pub id: i32,
    /// Serialized settings payload.
    pub payload: Value,
}
