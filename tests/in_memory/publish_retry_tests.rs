//! Publish failure, retained error context, and retry behavior.

use super::helpers::{post, Harness};
use agora::poll::domain::{ModerationDecision, PollConflict, PollId, PollStatus, PublishedPollRef};
use agora::poll::ports::UpstreamError;
use agora::poll::services::{PublishError, PublishOutcome};

async fn approved_poll(harness: &Harness) -> PollId {
    harness
        .social
        .script_search(Ok(vec![post("p-1", "storm damage reports")]));
    harness.model.script(Ok(serde_json::json!([
        { "question": "Was the response fast enough?", "options": ["Yes", "No"] }
    ])
    .to_string()));
    let report = harness
        .cycle
        .run_cycle(None, None)
        .await
        .expect("cycle should succeed");
    let poll_id = *report.created_ids.first().expect("one created id");
    harness
        .moderation
        .decide(poll_id, ModerationDecision::approve())
        .await
        .expect("approval should succeed");
    poll_id
}

#[tokio::test(flavor = "multi_thread")]
async fn network_failure_moves_record_to_failed_and_retry_posts() {
    let harness = Harness::new();
    let poll_id = approved_poll(&harness).await;

    harness
        .social
        .script_create(Err(UpstreamError::Network("connection reset".to_owned())));
    let first = harness
        .publish
        .publish(poll_id)
        .await
        .expect("attempt should complete with an outcome");
    let PublishOutcome::Failed { record, error } = first else {
        panic!("expected a failed outcome");
    };
    assert_eq!(record.status(), PollStatus::Failed);
    assert!(error.contains("connection reset"));
    assert!(record
        .publish_error()
        .is_some_and(|detail| detail.contains("connection reset")));

    harness
        .social
        .script_create(Ok(PublishedPollRef::new("net-9", "https://social.example/p/9")));
    let second = harness
        .publish
        .publish(poll_id)
        .await
        .expect("retry should complete with an outcome");
    let PublishOutcome::Posted(posted) = second else {
        panic!("expected the retry to post");
    };
    assert_eq!(posted.status(), PollStatus::Posted);
    assert!(posted.publish_error().is_none());
    assert_eq!(harness.social.create_calls(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn repeated_publish_results_in_one_external_call() {
    let harness = Harness::new();
    let poll_id = approved_poll(&harness).await;

    harness
        .social
        .script_create(Ok(PublishedPollRef::new("net-10", "https://social.example/p/10")));
    harness
        .publish
        .publish(poll_id)
        .await
        .expect("first publish should succeed");

    let second = harness.publish.publish(poll_id).await;
    assert!(matches!(
        second,
        Err(PublishError::Conflict(PollConflict::NotPublishable {
            status: PollStatus::Posted,
            ..
        }))
    ));
    assert_eq!(harness.social.create_calls(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn pending_poll_is_refused_without_an_external_call() {
    let harness = Harness::new();
    harness
        .social
        .script_search(Ok(vec![post("p-1", "park renovation plans")]));
    harness.model.script(Ok(serde_json::json!([
        { "question": "Fund the renovation?", "options": ["Yes", "No"] }
    ])
    .to_string()));
    let report = harness
        .cycle
        .run_cycle(None, None)
        .await
        .expect("cycle should succeed");
    let poll_id = *report.created_ids.first().expect("one created id");

    let result = harness.publish.publish(poll_id).await;

    assert!(matches!(
        result,
        Err(PublishError::Conflict(PollConflict::NotPublishable {
            status: PollStatus::Pending,
            ..
        }))
    ));
    assert_eq!(harness.social.create_calls(), 0);
}
