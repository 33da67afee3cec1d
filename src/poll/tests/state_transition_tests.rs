//! Unit tests for poll status transition validation.

use crate::poll::domain::PollStatus;
use rstest::rstest;

#[rstest]
#[case(PollStatus::Pending, PollStatus::Pending, false)]
#[case(PollStatus::Pending, PollStatus::Approved, true)]
#[case(PollStatus::Pending, PollStatus::Rejected, true)]
#[case(PollStatus::Pending, PollStatus::Posted, false)]
#[case(PollStatus::Pending, PollStatus::Failed, false)]
#[case(PollStatus::Approved, PollStatus::Pending, false)]
#[case(PollStatus::Approved, PollStatus::Approved, false)]
#[case(PollStatus::Approved, PollStatus::Rejected, false)]
#[case(PollStatus::Approved, PollStatus::Posted, true)]
#[case(PollStatus::Approved, PollStatus::Failed, true)]
#[case(PollStatus::Rejected, PollStatus::Pending, false)]
#[case(PollStatus::Rejected, PollStatus::Approved, false)]
#[case(PollStatus::Rejected, PollStatus::Rejected, false)]
#[case(PollStatus::Rejected, PollStatus::Posted, false)]
#[case(PollStatus::Rejected, PollStatus::Failed, false)]
#[case(PollStatus::Posted, PollStatus::Pending, false)]
#[case(PollStatus::Posted, PollStatus::Approved, false)]
#[case(PollStatus::Posted, PollStatus::Rejected, false)]
#[case(PollStatus::Posted, PollStatus::Posted, false)]
#[case(PollStatus::Posted, PollStatus::Failed, false)]
#[case(PollStatus::Failed, PollStatus::Pending, false)]
#[case(PollStatus::Failed, PollStatus::Approved, false)]
#[case(PollStatus::Failed, PollStatus::Rejected, false)]
#[case(PollStatus::Failed, PollStatus::Posted, true)]
#[case(PollStatus::Failed, PollStatus::Failed, true)]
fn can_transition_to_returns_expected(
    #[case] from: PollStatus,
    #[case] to: PollStatus,
    #[case] expected: bool,
) {
    assert_eq!(from.can_transition_to(to), expected);
}

#[rstest]
#[case(PollStatus::Pending, false)]
#[case(PollStatus::Approved, false)]
#[case(PollStatus::Rejected, true)]
#[case(PollStatus::Posted, true)]
#[case(PollStatus::Failed, false)]
fn is_terminal_returns_expected(#[case] status: PollStatus, #[case] expected: bool) {
    assert_eq!(status.is_terminal(), expected);
}

#[rstest]
#[case(PollStatus::Pending, true)]
#[case(PollStatus::Approved, false)]
#[case(PollStatus::Rejected, false)]
#[case(PollStatus::Posted, false)]
#[case(PollStatus::Failed, false)]
fn allows_content_edits_only_while_pending(#[case] status: PollStatus, #[case] expected: bool) {
    assert_eq!(status.allows_content_edits(), expected);
}

#[rstest]
#[case(PollStatus::Pending, false)]
#[case(PollStatus::Approved, true)]
#[case(PollStatus::Rejected, false)]
#[case(PollStatus::Posted, false)]
#[case(PollStatus::Failed, true)]
fn is_publishable_for_approved_and_failed(#[case] status: PollStatus, #[case] expected: bool) {
    assert_eq!(status.is_publishable(), expected);
}

#[rstest]
fn status_round_trips_through_storage_representation() {
    for status in PollStatus::ALL {
        let parsed = PollStatus::try_from(status.as_str()).expect("canonical form should parse");
        assert_eq!(parsed, status);
    }
}

#[rstest]
fn status_parse_rejects_unknown_values() {
    assert!(PollStatus::try_from("published").is_err());
    assert!(PollStatus::try_from("").is_err());
}

#[rstest]
fn status_parse_normalizes_case_and_whitespace() {
    assert_eq!(
        PollStatus::try_from(" Pending ").expect("should parse"),
        PollStatus::Pending
    );
}
