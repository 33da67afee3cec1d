//! Diesel row models for poll persistence.

use super::schema::{polls, used_posts};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for poll records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = polls)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PollRow {
    /// Poll record identifier.
    pub id: uuid::Uuid,
    /// Denormalized lifecycle status.
    pub status: String,
    /// Full serialized record.
    pub payload: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert/update model for poll records.
///
/// The status column and the payload travel in the same row write, which
/// makes the record and its status index one atomic unit.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = polls)]
pub struct NewPollRow {
    /// Poll record identifier.
    pub id: uuid::Uuid,
    /// Denormalized lifecycle status.
    pub status: String,
    /// Full serialized record.
    pub payload: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Row model for the used-post set.
#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = used_posts)]
pub struct UsedPostRow {
    /// Social-network post identifier.
    pub post_id: String,
}
