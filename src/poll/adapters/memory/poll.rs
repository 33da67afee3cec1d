//! Thread-safe in-memory poll repository.
//!
//! Reference implementation of the storage contract: a record map plus
//! one id-set per status, all mutated inside a single write-lock critical
//! section so readers never observe a record whose index entry disagrees
//! with its status field.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use crate::poll::{
    domain::{PollId, PollRecord, PollStatus, PostId},
    ports::{PollPage, PollRepository, PollRepositoryError, PollRepositoryResult},
};

/// Thread-safe in-memory poll repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPollRepository {
    state: Arc<RwLock<InMemoryPollState>>,
}

#[derive(Debug, Default)]
struct InMemoryPollState {
    records: HashMap<PollId, PollRecord>,
    status_index: BTreeMap<PollStatus, BTreeSet<PollId>>,
    used_posts: BTreeSet<PostId>,
}

impl InMemoryPollRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> PollRepositoryError {
    PollRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Removes the id from whichever status set currently holds it.
fn unindex(state: &mut InMemoryPollState, id: PollId) {
    for ids in state.status_index.values_mut() {
        ids.remove(&id);
    }
}

#[async_trait]
impl PollRepository for InMemoryPollRepository {
    async fn put(&self, record: &PollRecord) -> PollRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        unindex(&mut state, record.id());
        state
            .status_index
            .entry(record.status())
            .or_default()
            .insert(record.id());
        state.records.insert(record.id(), record.clone());
        Ok(())
    }

    async fn get(&self, id: PollId) -> PollRepositoryResult<Option<PollRecord>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.records.get(&id).cloned())
    }

    async fn delete(&self, id: PollId) -> PollRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let record = state
            .records
            .get(&id)
            .ok_or(PollRepositoryError::NotFound(id))?;
        if matches!(record.status(), PollStatus::Posted) {
            return Err(PollRepositoryError::PostedRetention(id));
        }
        unindex(&mut state, id);
        state.records.remove(&id);
        Ok(())
    }

    async fn list(
        &self,
        status_filter: Option<PollStatus>,
        limit: usize,
        offset: usize,
    ) -> PollRepositoryResult<PollPage> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut matching: Vec<PollRecord> = match status_filter {
            Some(status) => state
                .status_index
                .get(&status)
                .into_iter()
                .flatten()
                .filter_map(|id| state.records.get(id).cloned())
                .collect(),
            None => state.records.values().cloned().collect(),
        };
        matching.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        let total_count = matching.len();
        let records = matching.into_iter().skip(offset).take(limit).collect();
        Ok(PollPage {
            records,
            total_count,
        })
    }

    async fn count_by_status(&self) -> PollRepositoryResult<BTreeMap<PollStatus, usize>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(PollStatus::ALL
            .into_iter()
            .map(|status| {
                let count = state.status_index.get(&status).map_or(0, BTreeSet::len);
                (status, count)
            })
            .collect())
    }

    async fn mark_posts_used(&self, post_ids: &BTreeSet<PostId>) -> PollRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.used_posts.extend(post_ids.iter().cloned());
        Ok(())
    }

    async fn used_posts(&self) -> PollRepositoryResult<BTreeSet<PostId>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.used_posts.clone())
    }

    async fn clear_used_posts(&self) -> PollRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.used_posts.clear();
        Ok(())
    }
}
