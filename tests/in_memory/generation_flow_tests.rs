//! Cycle runs against scripted model output.

use super::helpers::{post, Harness};
use agora::poll::domain::PollStatus;
use agora::poll::ports::{PollRepository, UpstreamError};
use agora::poll::services::CycleError;

#[tokio::test(flavor = "multi_thread")]
async fn invalid_entries_reject_individually_while_valid_entries_persist() {
    let harness = Harness::new();
    harness
        .social
        .script_search(Ok(vec![post("p-1", "debate highlights")]));
    harness.model.script(Ok(serde_json::json!([
        {
            "question": "Who won the debate?",
            "options": ["Candidate A", "Candidate B"]
        },
        {
            "question": "Too many options to count?",
            "options": ["1", "2", "3", "4", "5"]
        }
    ])
    .to_string()));

    let report = harness
        .cycle
        .run_cycle(None, None)
        .await
        .expect("cycle should succeed");

    assert_eq!(report.drafts_created, 1);
    assert_eq!(report.drafts_rejected, 1);

    let page = harness
        .repository
        .list(Some(PollStatus::Pending), 10, 0)
        .await
        .expect("list should succeed");
    assert_eq!(page.total_count, 1);
    assert_eq!(
        page.records
            .first()
            .map(|record| record.question().as_str()),
        Some("Who won the debate?")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn model_failure_surfaces_as_generation_stage_error() {
    let harness = Harness::new();
    harness
        .social
        .script_search(Ok(vec![post("p-1", "election coverage")]));
    harness
        .model
        .script(Err(UpstreamError::RateLimit("quota exhausted".to_owned())));

    let result = harness.cycle.run_cycle(None, None).await;

    assert!(matches!(result, Err(CycleError::Generation(_))));
    let page = harness
        .repository
        .list(None, 10, 0)
        .await
        .expect("list should succeed");
    assert_eq!(page.total_count, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn rerunning_the_cycle_appends_new_drafts_without_deduplication() {
    let harness = Harness::new();
    let response = serde_json::json!([
        { "question": "Same question twice?", "options": ["Yes", "No"] }
    ])
    .to_string();

    harness
        .social
        .script_search(Ok(vec![post("p-1", "recurring story")]));
    harness.model.script(Ok(response.clone()));
    harness
        .cycle
        .run_cycle(None, None)
        .await
        .expect("first cycle should succeed");

    harness
        .social
        .script_search(Ok(vec![post("p-1", "recurring story")]));
    harness.model.script(Ok(response));
    harness
        .cycle
        .run_cycle(None, None)
        .await
        .expect("second cycle should succeed");

    // Both drafts exist: the orchestrator performs no deduplication
    // against earlier drafts from the same source posts.
    let page = harness
        .repository
        .list(Some(PollStatus::Pending), 10, 0)
        .await
        .expect("list should succeed");
    assert_eq!(page.total_count, 2);
}
