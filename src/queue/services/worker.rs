//! Worker that claims queued jobs and executes them to completion.
//!
//! Several workers may run concurrently against the same queue and
//! storage; units for different polls proceed fully in parallel, and
//! units racing on the same poll resolve through the domain guards.

use crate::poll::services::{CycleReport, CycleService, PublishOutcome, PublishService};
use crate::poll::{
    domain::PollId,
    ports::{LanguageModel, PollRepository, SocialNetwork},
};
use crate::queue::{
    domain::{Job, JobId},
    ports::{JobQueue, JobQueueResult},
};
use crate::settings::ports::SettingsRepository;
use mockable::Clock;
use std::sync::Arc;

/// Terminal result of one executed job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// The cycle ran to completion.
    CycleCompleted(CycleReport),
    /// A cycle stage failed; the error context is retained.
    CycleFailed(String),
    /// The poll was published.
    PollPublished(PollId),
    /// The external publish call failed; the record is FAILED.
    PublishFailed {
        /// The poll the publish was attempted for.
        poll_id: PollId,
        /// Why the external call failed.
        error: String,
    },
    /// The publish did not record an outcome: guard conflict, unknown
    /// poll, or a storage failure.
    PublishRefused {
        /// The poll the publish was attempted for.
        poll_id: PollId,
        /// Why the attempt was refused.
        reason: String,
    },
}

/// One claimed job together with how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedJob {
    /// Queue identity of the executed job.
    pub id: JobId,
    /// How execution ended.
    pub outcome: JobOutcome,
}

/// Executes queued units of work.
#[derive(Clone)]
pub struct JobWorker<S, L, R, G, C, Q>
where
    S: SocialNetwork,
    L: LanguageModel,
    R: PollRepository,
    G: SettingsRepository,
    C: Clock + Send + Sync,
    Q: JobQueue,
{
    queue: Arc<Q>,
    cycle: CycleService<S, L, R, G, C>,
    publish: PublishService<R, S, C>,
}

impl<S, L, R, G, C, Q> JobWorker<S, L, R, G, C, Q>
where
    S: SocialNetwork,
    L: LanguageModel,
    R: PollRepository,
    G: SettingsRepository,
    C: Clock + Send + Sync,
    Q: JobQueue,
{
    /// Creates a worker over the given queue and services.
    #[must_use]
    pub const fn new(
        queue: Arc<Q>,
        cycle: CycleService<S, L, R, G, C>,
        publish: PublishService<R, S, C>,
    ) -> Self {
        Self {
            queue,
            cycle,
            publish,
        }
    }

    /// Claims and executes the oldest queued job, if any.
    ///
    /// The job runs to completion or failure; failures become outcomes,
    /// never silent drops.
    ///
    /// # Errors
    ///
    /// Returns [`crate::queue::ports::JobQueueError`] when the queue
    /// itself fails.
    pub async fn run_next(&self) -> JobQueueResult<Option<CompletedJob>> {
        let Some(claimed) = self.queue.claim().await? else {
            return Ok(None);
        };
        let (id, job) = claimed.into_parts();
        tracing::info!(job_id = %id, "job claimed");
        let outcome = self.execute(job).await;
        Ok(Some(CompletedJob { id, outcome }))
    }

    /// Executes queued jobs until the queue is empty.
    ///
    /// # Errors
    ///
    /// Returns [`crate::queue::ports::JobQueueError`] when the queue
    /// itself fails.
    pub async fn drain(&self) -> JobQueueResult<Vec<CompletedJob>> {
        let mut completed = Vec::new();
        while let Some(done) = self.run_next().await? {
            completed.push(done);
        }
        Ok(completed)
    }

    async fn execute(&self, job: Job) -> JobOutcome {
        match job {
            Job::RunCycle { hashtags, limit } => {
                match self.cycle.run_cycle(hashtags.as_deref(), limit).await {
                    Ok(report) => JobOutcome::CycleCompleted(report),
                    Err(error) => {
                        tracing::warn!(%error, "cycle job failed");
                        JobOutcome::CycleFailed(error.to_string())
                    }
                }
            }
            Job::PublishPoll { poll_id } => match self.publish.publish(poll_id).await {
                Ok(PublishOutcome::Posted(_)) => JobOutcome::PollPublished(poll_id),
                Ok(PublishOutcome::Failed { error, .. }) => {
                    JobOutcome::PublishFailed { poll_id, error }
                }
                Err(refusal) => {
                    tracing::info!(poll_id = %poll_id, reason = %refusal, "publish job refused");
                    JobOutcome::PublishRefused {
                        poll_id,
                        reason: refusal.to_string(),
                    }
                }
            },
        }
    }
}
