//! End-to-end lifecycle scenarios over in-memory storage.

use super::helpers::{post, Harness};
use agora::poll::domain::{
    ModerationDecision, OptionText, PollConflict, PollOptions, PollStatus, PollUpdate,
    QuestionText,
};
use agora::poll::ports::PollRepository;
use agora::poll::services::{ModerationError, PublishOutcome};

fn drafts_response() -> String {
    serde_json::json!([
        {
            "question": "Which issue matters most right now?",
            "options": ["Economy", "Climate", "Healthcare"]
        }
    ])
    .to_string()
}

#[tokio::test(flavor = "multi_thread")]
async fn draft_is_approved_published_and_retained_for_audit() {
    let harness = Harness::new();
    harness
        .social
        .script_search(Ok(vec![post("p-1", "tax bill vote tonight")]));
    harness.model.script(Ok(drafts_response()));

    // Cycle: one pending draft with three options.
    let report = harness
        .cycle
        .run_cycle(None, None)
        .await
        .expect("cycle should succeed");
    assert_eq!(report.drafts_created, 1);
    let poll_id = *report.created_ids.first().expect("one created id");

    let pending = harness
        .moderation
        .get(poll_id)
        .await
        .expect("draft should exist");
    assert_eq!(pending.status(), PollStatus::Pending);
    assert_eq!(pending.options().len(), 3);

    // Moderation: approve.
    let approved = harness
        .moderation
        .decide(poll_id, ModerationDecision::approve())
        .await
        .expect("approval should succeed");
    assert_eq!(approved.status(), PollStatus::Approved);

    // Publish: POSTED with external references recorded.
    harness.social.script_create(Ok(
        agora::poll::domain::PublishedPollRef::new("net-7", "https://social.example/p/7"),
    ));
    let outcome = harness
        .publish
        .publish(poll_id)
        .await
        .expect("publish should succeed");
    let PublishOutcome::Posted(posted) = outcome else {
        panic!("expected a posted outcome");
    };
    assert_eq!(posted.status(), PollStatus::Posted);
    assert!(posted.published().is_some());

    // Audit retention: posted polls cannot be deleted.
    let delete = harness.moderation.delete(poll_id).await;
    assert!(matches!(
        delete,
        Err(ModerationError::Conflict(
            PollConflict::PostedRetention { .. }
        ))
    ));
    assert!(harness
        .repository
        .get(poll_id)
        .await
        .expect("get should succeed")
        .is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn posted_record_rejects_content_edits_unchanged() {
    let harness = Harness::new();
    harness
        .social
        .script_search(Ok(vec![post("p-1", "city budget hearing")]));
    harness.model.script(Ok(drafts_response()));

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
    harness.social.script_create(Ok(
        agora::poll::domain::PublishedPollRef::new("net-8", "https://social.example/p/8"),
    ));
    harness
        .publish
        .publish(poll_id)
        .await
        .expect("publish should succeed");
    let before = harness
        .moderation
        .get(poll_id)
        .await
        .expect("record should exist");

    let update = PollUpdate::new()
        .with_question(QuestionText::new("Changed after posting?").expect("valid question"));
    let result = harness.moderation.update(poll_id, update).await;

    assert!(matches!(
        result,
        Err(ModerationError::Conflict(PollConflict::ContentLocked {
            status: PollStatus::Posted,
            ..
        }))
    ));
    let after = harness
        .moderation
        .get(poll_id)
        .await
        .expect("record should exist");
    assert_eq!(after, before);
}

#[tokio::test(flavor = "multi_thread")]
async fn decide_with_edits_is_observed_atomically() {
    let harness = Harness::new();
    harness
        .social
        .script_search(Ok(vec![post("p-1", "ballot measure recap")]));
    harness.model.script(Ok(drafts_response()));

    let report = harness
        .cycle
        .run_cycle(None, None)
        .await
        .expect("cycle should succeed");
    let poll_id = *report.created_ids.first().expect("one created id");

    let decision = ModerationDecision::approve()
        .with_edited_question(QuestionText::new("Edited for clarity?").expect("valid question"))
        .with_edited_options(
            PollOptions::from_texts(vec![
                OptionText::new("For").expect("valid option"),
                OptionText::new("Against").expect("valid option"),
            ])
            .expect("valid option count"),
        );
    harness
        .moderation
        .decide(poll_id, decision)
        .await
        .expect("decision should succeed");

    // The stored record carries the decision's full state: edited content
    // together with the approved status, never a mix.
    let stored = harness
        .repository
        .get(poll_id)
        .await
        .expect("get should succeed")
        .expect("record should exist");
    assert_eq!(stored.status(), PollStatus::Approved);
    assert_eq!(stored.question().as_str(), "Edited for clarity?");
    assert_eq!(stored.options().len(), 2);
}
