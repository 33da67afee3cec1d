//! Contract tests for the in-memory poll repository.

use crate::poll::{
    adapters::InMemoryPollRepository,
    domain::{
        DurationHours, ModerationDecision, OptionText, PollDraft, PollOptions, PollRecord,
        PollStatus, PostId, PublishedPollRef, QuestionText,
    },
    ports::{PollRepository, PollRepositoryError},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::collections::BTreeSet;
use std::time::Duration;

fn draft_record(question: &str) -> PollRecord {
    let draft = PollDraft::new(
        QuestionText::new(question).expect("valid question"),
        PollOptions::from_texts(vec![
            OptionText::new("Yes").expect("valid option"),
            OptionText::new("No").expect("valid option"),
        ])
        .expect("valid option count"),
        DurationHours::DEFAULT,
    );
    PollRecord::new_draft(
        draft,
        vec![PostId::new("post-1").expect("valid post id")],
        &DefaultClock,
    )
}

#[fixture]
fn repository() -> InMemoryPollRepository {
    InMemoryPollRepository::new()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn put_then_get_round_trips(repository: InMemoryPollRepository) {
    let record = draft_record("Round trip?");
    repository.put(&record).await.expect("put should succeed");

    let fetched = repository
        .get(record.id())
        .await
        .expect("get should succeed");
    assert_eq!(fetched, Some(record));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn put_moves_record_between_status_indices(repository: InMemoryPollRepository) {
    let mut record = draft_record("Index move?");
    repository.put(&record).await.expect("put should succeed");

    record
        .decide(ModerationDecision::approve(), &DefaultClock)
        .expect("approval succeeds");
    repository.put(&record).await.expect("replace should succeed");

    let pending = repository
        .list(Some(PollStatus::Pending), 10, 0)
        .await
        .expect("list should succeed");
    assert_eq!(pending.total_count, 0);

    let approved = repository
        .list(Some(PollStatus::Approved), 10, 0)
        .await
        .expect("list should succeed");
    assert_eq!(approved.total_count, 1);

    let counts = repository
        .count_by_status()
        .await
        .expect("count should succeed");
    assert_eq!(counts.get(&PollStatus::Pending), Some(&0));
    assert_eq!(counts.get(&PollStatus::Approved), Some(&1));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_orders_newest_first_with_pagination(repository: InMemoryPollRepository) {
    let first = draft_record("First?");
    repository.put(&first).await.expect("put should succeed");
    std::thread::sleep(Duration::from_millis(5));
    let second = draft_record("Second?");
    repository.put(&second).await.expect("put should succeed");
    std::thread::sleep(Duration::from_millis(5));
    let third = draft_record("Third?");
    repository.put(&third).await.expect("put should succeed");

    let page = repository
        .list(None, 2, 0)
        .await
        .expect("list should succeed");
    assert_eq!(page.total_count, 3);
    let questions: Vec<&str> = page
        .records
        .iter()
        .map(|record| record.question().as_str())
        .collect();
    assert_eq!(questions, vec!["Third?", "Second?"]);

    let tail = repository
        .list(None, 2, 2)
        .await
        .expect("list should succeed");
    assert_eq!(tail.records.len(), 1);
    assert_eq!(
        tail.records.first().map(|record| record.question().as_str()),
        Some("First?")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_is_guarded_at_the_storage_boundary(repository: InMemoryPollRepository) {
    let pending = draft_record("Deletable?");
    repository.put(&pending).await.expect("put should succeed");
    repository
        .delete(pending.id())
        .await
        .expect("pending records delete");
    assert_eq!(
        repository
            .get(pending.id())
            .await
            .expect("get should succeed"),
        None
    );

    let mut posted = draft_record("Retained?");
    posted
        .decide(ModerationDecision::approve(), &DefaultClock)
        .expect("approval succeeds");
    posted
        .record_publish_success(
            PublishedPollRef::new("net-1", "https://social.example/p/1"),
            &DefaultClock,
        )
        .expect("publish succeeds");
    repository.put(&posted).await.expect("put should succeed");

    let result = repository.delete(posted.id()).await;
    assert!(matches!(
        result,
        Err(PollRepositoryError::PostedRetention(id)) if id == posted.id()
    ));
    assert!(repository
        .get(posted.id())
        .await
        .expect("get should succeed")
        .is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_unknown_id_reports_not_found(repository: InMemoryPollRepository) {
    let unknown = draft_record("Missing?");
    let result = repository.delete(unknown.id()).await;
    assert!(matches!(
        result,
        Err(PollRepositoryError::NotFound(id)) if id == unknown.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn used_post_tracking_accumulates_and_clears(repository: InMemoryPollRepository) {
    let first: BTreeSet<PostId> = [
        PostId::new("a").expect("valid post id"),
        PostId::new("b").expect("valid post id"),
    ]
    .into_iter()
    .collect();
    let second: BTreeSet<PostId> = [
        PostId::new("b").expect("valid post id"),
        PostId::new("c").expect("valid post id"),
    ]
    .into_iter()
    .collect();

    repository
        .mark_posts_used(&first)
        .await
        .expect("mark should succeed");
    repository
        .mark_posts_used(&second)
        .await
        .expect("mark should succeed");

    let used = repository.used_posts().await.expect("read should succeed");
    assert_eq!(used.len(), 3);

    repository
        .clear_used_posts()
        .await
        .expect("clear should succeed");
    assert!(repository
        .used_posts()
        .await
        .expect("read should succeed")
        .is_empty());
}
