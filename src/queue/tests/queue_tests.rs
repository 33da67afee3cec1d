//! Contract tests for the in-memory job queue.

use crate::poll::domain::PollId;
use crate::queue::{
    adapters::InMemoryJobQueue,
    domain::Job,
    ports::JobQueue,
};
use rstest::{fixture, rstest};

fn cycle_job() -> Job {
    Job::RunCycle {
        hashtags: None,
        limit: None,
    }
}

fn publish_job() -> Job {
    Job::PublishPoll {
        poll_id: PollId::new(),
    }
}

#[fixture]
fn queue() -> InMemoryJobQueue {
    InMemoryJobQueue::new()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn claim_returns_jobs_in_fifo_order(queue: InMemoryJobQueue) {
    let first = queue
        .enqueue(cycle_job())
        .await
        .expect("enqueue should succeed");
    let second = queue
        .enqueue(publish_job())
        .await
        .expect("enqueue should succeed");

    let claimed_first = queue
        .claim()
        .await
        .expect("claim should succeed")
        .expect("a job is queued");
    let claimed_second = queue
        .claim()
        .await
        .expect("claim should succeed")
        .expect("a job is queued");

    assert_eq!(claimed_first.id(), first);
    assert_eq!(claimed_second.id(), second);
    assert!(queue.claim().await.expect("claim should succeed").is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn discard_removes_only_unclaimed_jobs(queue: InMemoryJobQueue) {
    let first = queue
        .enqueue(cycle_job())
        .await
        .expect("enqueue should succeed");
    let second = queue
        .enqueue(publish_job())
        .await
        .expect("enqueue should succeed");

    assert!(queue.discard(second).await.expect("discard should succeed"));
    assert_eq!(queue.pending().await.expect("pending should succeed"), 1);

    let claimed = queue
        .claim()
        .await
        .expect("claim should succeed")
        .expect("a job is queued");
    assert_eq!(claimed.id(), first);

    // Already claimed: the queue no longer knows the job.
    assert!(!queue.discard(first).await.expect("discard should succeed"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pending_counts_unclaimed_jobs(queue: InMemoryJobQueue) {
    assert_eq!(queue.pending().await.expect("pending should succeed"), 0);
    queue
        .enqueue(cycle_job())
        .await
        .expect("enqueue should succeed");
    queue
        .enqueue(cycle_job())
        .await
        .expect("enqueue should succeed");
    assert_eq!(queue.pending().await.expect("pending should succeed"), 2);
}

#[rstest]
fn jobs_round_trip_through_serde() {
    let job = Job::PublishPoll {
        poll_id: PollId::new(),
    };
    let encoded = serde_json::to_string(&job).expect("serializable job");
    let decoded: Job = serde_json::from_str(&encoded).expect("deserializable job");
    assert_eq!(decoded, job);
}
