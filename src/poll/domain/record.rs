//! Poll record aggregate and the guarded mutations that drive its
//! lifecycle.
//!
//! Every status-dependent precondition lives on [`PollRecord`] so callers
//! cannot bypass or duplicate guard logic. Services read the current
//! record, apply exactly one guarded mutation, and write the whole record
//! back.

use super::{
    DurationHours, PollConflict, PollDraft, PollId, PollOptions, PollStatus, PostId, QuestionText,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Maximum number of source posts retained per record.
const SOURCE_POST_CAP: usize = 10;

/// External references recorded after a successful publish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedPollRef {
    poll_id: String,
    post_url: String,
}

impl PublishedPollRef {
    /// Creates a reference to the published network poll.
    #[must_use]
    pub fn new(poll_id: impl Into<String>, post_url: impl Into<String>) -> Self {
        Self {
            poll_id: poll_id.into(),
            post_url: post_url.into(),
        }
    }

    /// Returns the network's poll identifier.
    #[must_use]
    pub fn poll_id(&self) -> &str {
        &self.poll_id
    }

    /// Returns the URL of the published post.
    #[must_use]
    pub fn post_url(&self) -> &str {
        &self.post_url
    }
}

/// Content edit applied to a pending record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollUpdate {
    question: Option<QuestionText>,
    options: Option<PollOptions>,
    duration_hours: Option<DurationHours>,
}

impl PollUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement question.
    #[must_use]
    pub fn with_question(mut self, question: QuestionText) -> Self {
        self.question = Some(question);
        self
    }

    /// Sets replacement options.
    #[must_use]
    pub fn with_options(mut self, options: PollOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Sets a replacement duration.
    #[must_use]
    pub const fn with_duration_hours(mut self, duration_hours: DurationHours) -> Self {
        self.duration_hours = Some(duration_hours);
        self
    }

    /// Returns whether the update carries no changes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.question.is_none() && self.options.is_none() && self.duration_hours.is_none()
    }
}

/// Moderator verdict on a pending draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationVerdict {
    /// The draft may be published.
    Approved,
    /// The draft is declined; terminal.
    Rejected,
}

impl ModerationVerdict {
    /// Returns the status the verdict transitions the record to.
    #[must_use]
    pub const fn target_status(self) -> PollStatus {
        match self {
            Self::Approved => PollStatus::Approved,
            Self::Rejected => PollStatus::Rejected,
        }
    }
}

/// A moderation decision with optional accompanying edits.
///
/// Edits ride along with the verdict so decision and content change land
/// in a single write; edits are applied only on approval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationDecision {
    verdict: ModerationVerdict,
    edited_question: Option<QuestionText>,
    edited_options: Option<PollOptions>,
    notes: Option<String>,
}

impl ModerationDecision {
    /// Creates an approval decision.
    #[must_use]
    pub const fn approve() -> Self {
        Self {
            verdict: ModerationVerdict::Approved,
            edited_question: None,
            edited_options: None,
            notes: None,
        }
    }

    /// Creates a rejection decision.
    #[must_use]
    pub const fn reject() -> Self {
        Self {
            verdict: ModerationVerdict::Rejected,
            edited_question: None,
            edited_options: None,
            notes: None,
        }
    }

    /// Sets an edited question applied with the approval.
    #[must_use]
    pub fn with_edited_question(mut self, question: QuestionText) -> Self {
        self.edited_question = Some(question);
        self
    }

    /// Sets edited options applied with the approval.
    #[must_use]
    pub fn with_edited_options(mut self, options: PollOptions) -> Self {
        self.edited_options = Some(options);
        self
    }

    /// Attaches moderator notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Returns the verdict.
    #[must_use]
    pub const fn verdict(&self) -> ModerationVerdict {
        self.verdict
    }
}

/// The central poll entity tracked from draft to publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollRecord {
    id: PollId,
    question: QuestionText,
    options: PollOptions,
    duration_hours: DurationHours,
    status: PollStatus,
    source_post_ids: BTreeSet<PostId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    moderated_at: Option<DateTime<Utc>>,
    moderator_notes: Option<String>,
    published: Option<PublishedPollRef>,
    publish_error: Option<String>,
}

impl PollRecord {
    /// Creates a pending draft record from validated generation output.
    ///
    /// At most ten source posts are retained for provenance.
    #[must_use]
    pub fn new_draft(
        draft: PollDraft,
        source_post_ids: impl IntoIterator<Item = PostId>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        let (question, options, duration_hours) = draft.into_parts();
        Self {
            id: PollId::new(),
            question,
            options,
            duration_hours,
            status: PollStatus::Pending,
            source_post_ids: source_post_ids.into_iter().take(SOURCE_POST_CAP).collect(),
            created_at: timestamp,
            updated_at: timestamp,
            moderated_at: None,
            moderator_notes: None,
            published: None,
            publish_error: None,
        }
    }

    /// Returns the poll identifier.
    #[must_use]
    pub const fn id(&self) -> PollId {
        self.id
    }

    /// Returns the question.
    #[must_use]
    pub const fn question(&self) -> &QuestionText {
        &self.question
    }

    /// Returns the options.
    #[must_use]
    pub const fn options(&self) -> &PollOptions {
        &self.options
    }

    /// Returns the poll lifetime.
    #[must_use]
    pub const fn duration_hours(&self) -> DurationHours {
        self.duration_hours
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> PollStatus {
        self.status
    }

    /// Returns the originating post identifiers.
    #[must_use]
    pub const fn source_post_ids(&self) -> &BTreeSet<PostId> {
        &self.source_post_ids
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns when the moderation decision was made, if any.
    #[must_use]
    pub const fn moderated_at(&self) -> Option<DateTime<Utc>> {
        self.moderated_at
    }

    /// Returns the moderator notes, if any.
    #[must_use]
    pub fn moderator_notes(&self) -> Option<&str> {
        self.moderator_notes.as_deref()
    }

    /// Returns the external publish references, if published.
    #[must_use]
    pub const fn published(&self) -> Option<&PublishedPollRef> {
        self.published.as_ref()
    }

    /// Returns the retained error of the last failed publish, if any.
    #[must_use]
    pub fn publish_error(&self) -> Option<&str> {
        self.publish_error.as_deref()
    }

    /// Applies a content edit to a pending record.
    ///
    /// # Errors
    ///
    /// Returns [`PollConflict::ContentLocked`] when the record is no longer
    /// pending; the record is left unchanged.
    pub fn apply_update(
        &mut self,
        update: PollUpdate,
        clock: &impl Clock,
    ) -> Result<(), PollConflict> {
        if !self.status.allows_content_edits() {
            return Err(PollConflict::ContentLocked {
                poll_id: self.id,
                status: self.status,
            });
        }
        let PollUpdate {
            question,
            options,
            duration_hours,
        } = update;
        if let Some(new_question) = question {
            self.question = new_question;
        }
        if let Some(new_options) = options {
            self.options = new_options;
        }
        if let Some(new_duration) = duration_hours {
            self.duration_hours = new_duration;
        }
        self.touch(clock);
        Ok(())
    }

    /// Applies a moderation decision, with any accompanying edits, as one
    /// mutation.
    ///
    /// Edits land only on approval; notes are stored for either verdict.
    ///
    /// # Errors
    ///
    /// Returns [`PollConflict::InvalidTransition`] when the record is not
    /// pending; the record is left unchanged.
    pub fn decide(
        &mut self,
        decision: ModerationDecision,
        clock: &impl Clock,
    ) -> Result<(), PollConflict> {
        let target = decision.verdict.target_status();
        self.check_transition(target)?;
        let ModerationDecision {
            verdict,
            edited_question,
            edited_options,
            notes,
        } = decision;
        if verdict == ModerationVerdict::Approved {
            if let Some(new_question) = edited_question {
                self.question = new_question;
            }
            if let Some(new_options) = edited_options {
                self.options = new_options;
            }
        }
        if let Some(new_notes) = notes {
            self.moderator_notes = Some(new_notes);
        }
        self.status = target;
        self.moderated_at = Some(clock.utc());
        self.touch(clock);
        Ok(())
    }

    /// Confirms the record may be published right now.
    ///
    /// # Errors
    ///
    /// Returns [`PollConflict::NotPublishable`] unless the record is
    /// approved or a failed retry candidate.
    pub const fn ensure_publishable(&self) -> Result<(), PollConflict> {
        if !self.status.is_publishable() {
            return Err(PollConflict::NotPublishable {
                poll_id: self.id,
                status: self.status,
            });
        }
        Ok(())
    }

    /// Records a successful publish, transitioning to POSTED.
    ///
    /// # Errors
    ///
    /// Returns [`PollConflict::InvalidTransition`] when the record is not
    /// publishable; the record is left unchanged.
    pub fn record_publish_success(
        &mut self,
        published: PublishedPollRef,
        clock: &impl Clock,
    ) -> Result<(), PollConflict> {
        self.check_transition(PollStatus::Posted)?;
        self.status = PollStatus::Posted;
        self.published = Some(published);
        self.publish_error = None;
        self.touch(clock);
        Ok(())
    }

    /// Records a failed publish, transitioning to FAILED and retaining the
    /// error context for the moderation listings.
    ///
    /// # Errors
    ///
    /// Returns [`PollConflict::InvalidTransition`] when the record is not
    /// publishable; the record is left unchanged.
    pub fn record_publish_failure(
        &mut self,
        reason: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), PollConflict> {
        self.check_transition(PollStatus::Failed)?;
        self.status = PollStatus::Failed;
        self.publish_error = Some(reason.into());
        self.touch(clock);
        Ok(())
    }

    /// Confirms the record may be deleted.
    ///
    /// # Errors
    ///
    /// Returns [`PollConflict::PostedRetention`] for posted records, which
    /// are retained for audit.
    pub const fn ensure_deletable(&self) -> Result<(), PollConflict> {
        if matches!(self.status, PollStatus::Posted) {
            return Err(PollConflict::PostedRetention { poll_id: self.id });
        }
        Ok(())
    }

    /// Verifies the lifecycle graph permits moving to `to`.
    const fn check_transition(&self, to: PollStatus) -> Result<(), PollConflict> {
        if !self.status.can_transition_to(to) {
            return Err(PollConflict::InvalidTransition {
                poll_id: self.id,
                from: self.status,
                to,
            });
        }
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
