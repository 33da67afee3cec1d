//! `PostgreSQL` repository implementation for poll storage.
//!
//! Each record occupies one row: the JSONB payload is canonical and the
//! status column is denormalized from it on every write, so a single row
//! upsert updates record and status index together. A B-tree index on the
//! status column keeps per-status lookup proportional to that subset.

use super::{
    models::{NewPollRow, PollRow, UsedPostRow},
    schema::{polls, used_posts},
};
use crate::poll::{
    domain::{PollId, PollRecord, PollStatus, PostId},
    ports::{PollPage, PollRepository, PollRepositoryError, PollRepositoryResult},
};
use async_trait::async_trait;
use diesel::dsl::count_star;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use std::collections::{BTreeMap, BTreeSet};

/// `PostgreSQL` connection pool type used by poll adapters.
pub type PollPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed poll repository.
#[derive(Debug, Clone)]
pub struct PostgresPollRepository {
    pool: PollPgPool,
}

// Lets repository methods run inside `Connection::transaction`, which
// requires the error type to absorb raw diesel errors.
impl From<diesel::result::Error> for PollRepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        Self::persistence(err)
    }
}

impl PostgresPollRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PollPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> PollRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> PollRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(PollRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(PollRepositoryError::persistence)?
    }
}

#[async_trait]
impl PollRepository for PostgresPollRepository {
    async fn put(&self, record: &PollRecord) -> PollRepositoryResult<()> {
        let row = to_row(record)?;
        self.run_blocking(move |connection| {
            diesel::insert_into(polls::table)
                .values(&row)
                .on_conflict(polls::id)
                .do_update()
                .set(&row)
                .execute(connection)
                .map_err(PollRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn get(&self, id: PollId) -> PollRepositoryResult<Option<PollRecord>> {
        self.run_blocking(move |connection| {
            let row = polls::table
                .filter(polls::id.eq(id.into_inner()))
                .select(PollRow::as_select())
                .first::<PollRow>(connection)
                .optional()
                .map_err(PollRepositoryError::persistence)?;
            row.map(row_to_record).transpose()
        })
        .await
    }

    async fn delete(&self, id: PollId) -> PollRepositoryResult<()> {
        self.run_blocking(move |connection| {
            connection.transaction::<(), PollRepositoryError, _>(|transaction| {
                let status = polls::table
                    .filter(polls::id.eq(id.into_inner()))
                    .select(polls::status)
                    .first::<String>(transaction)
                    .optional()
                    .map_err(PollRepositoryError::persistence)?
                    .ok_or(PollRepositoryError::NotFound(id))?;
                if status == PollStatus::Posted.as_str() {
                    return Err(PollRepositoryError::PostedRetention(id));
                }
                diesel::delete(polls::table.filter(polls::id.eq(id.into_inner())))
                    .execute(transaction)
                    .map_err(PollRepositoryError::persistence)?;
                Ok(())
            })
        })
        .await
    }

    async fn list(
        &self,
        status_filter: Option<PollStatus>,
        limit: usize,
        offset: usize,
    ) -> PollRepositoryResult<PollPage> {
        let page_limit = to_i64(limit)?;
        let page_offset = to_i64(offset)?;
        self.run_blocking(move |connection| {
            let total = match status_filter {
                Some(status) => polls::table
                    .filter(polls::status.eq(status.as_str()))
                    .select(count_star())
                    .first::<i64>(connection),
                None => polls::table.select(count_star()).first::<i64>(connection),
            }
            .map_err(PollRepositoryError::persistence)?;

            let mut page_query = polls::table.select(PollRow::as_select()).into_boxed();
            if let Some(status) = status_filter {
                page_query = page_query.filter(polls::status.eq(status.as_str()));
            }
            let rows = page_query
                .order((polls::created_at.desc(), polls::id.desc()))
                .limit(page_limit)
                .offset(page_offset)
                .load::<PollRow>(connection)
                .map_err(PollRepositoryError::persistence)?;

            let records = rows
                .into_iter()
                .map(row_to_record)
                .collect::<PollRepositoryResult<Vec<_>>>()?;
            let total_count =
                usize::try_from(total).map_err(PollRepositoryError::persistence)?;
            Ok(PollPage {
                records,
                total_count,
            })
        })
        .await
    }

    async fn count_by_status(&self) -> PollRepositoryResult<BTreeMap<PollStatus, usize>> {
        self.run_blocking(|connection| {
            let grouped = polls::table
                .group_by(polls::status)
                .select((polls::status, count_star()))
                .load::<(String, i64)>(connection)
                .map_err(PollRepositoryError::persistence)?;

            let mut counts: BTreeMap<PollStatus, usize> = PollStatus::ALL
                .into_iter()
                .map(|status| (status, 0))
                .collect();
            for (raw_status, total) in grouped {
                let status = PollStatus::try_from(raw_status.as_str())
                    .map_err(PollRepositoryError::persistence)?;
                let count = usize::try_from(total).map_err(PollRepositoryError::persistence)?;
                counts.insert(status, count);
            }
            Ok(counts)
        })
        .await
    }

    async fn mark_posts_used(&self, post_ids: &BTreeSet<PostId>) -> PollRepositoryResult<()> {
        if post_ids.is_empty() {
            return Ok(());
        }
        let rows: Vec<UsedPostRow> = post_ids
            .iter()
            .map(|post_id| UsedPostRow {
                post_id: post_id.as_str().to_owned(),
            })
            .collect();
        self.run_blocking(move |connection| {
            diesel::insert_into(used_posts::table)
                .values(&rows)
                .on_conflict_do_nothing()
                .execute(connection)
                .map_err(PollRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn used_posts(&self) -> PollRepositoryResult<BTreeSet<PostId>> {
        self.run_blocking(|connection| {
            let ids = used_posts::table
                .select(used_posts::post_id)
                .load::<String>(connection)
                .map_err(PollRepositoryError::persistence)?;
            ids.into_iter()
                .map(|raw| PostId::new(raw).map_err(PollRepositoryError::persistence))
                .collect()
        })
        .await
    }

    async fn clear_used_posts(&self) -> PollRepositoryResult<()> {
        self.run_blocking(|connection| {
            diesel::delete(used_posts::table)
                .execute(connection)
                .map_err(PollRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

/// Serializes a record into its row form.
fn to_row(record: &PollRecord) -> PollRepositoryResult<NewPollRow> {
    let payload = serde_json::to_value(record).map_err(PollRepositoryError::persistence)?;
    Ok(NewPollRow {
        id: record.id().into_inner(),
        status: record.status().as_str().to_owned(),
        payload,
        created_at: record.created_at(),
        updated_at: record.updated_at(),
    })
}

/// Reconstructs a record from its row form; the payload is canonical.
fn row_to_record(row: PollRow) -> PollRepositoryResult<PollRecord> {
    let record = serde_json::from_value::<PollRecord>(row.payload)
        .map_err(PollRepositoryError::persistence)?;
    debug_assert!(
        record.status().as_str() == row.status,
        "status column must mirror the payload status"
    );
    Ok(record)
}

/// Converts a pagination value into the SQL integer type.
fn to_i64(value: usize) -> PollRepositoryResult<i64> {
    i64::try_from(value).map_err(PollRepositoryError::persistence)
}
