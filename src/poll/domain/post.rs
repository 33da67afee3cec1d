//! Normalized social post summaries produced by the fetch stage.

use super::PostId;
use crate::settings::domain::Hashtag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A social post matched by a monitored hashtag, reduced to the fields
/// the generation stage needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    id: PostId,
    text: String,
    author: String,
    created_at: DateTime<Utc>,
    hashtag: Hashtag,
}

impl PostSummary {
    /// Creates a normalized post summary.
    #[must_use]
    pub fn new(
        id: PostId,
        text: impl Into<String>,
        author: impl Into<String>,
        created_at: DateTime<Utc>,
        hashtag: Hashtag,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            author: author.into(),
            created_at,
            hashtag,
        }
    }

    /// Returns the post identifier.
    #[must_use]
    pub const fn id(&self) -> &PostId {
        &self.id
    }

    /// Returns the post text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the author's username.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the post's creation time.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the hashtag the post was found under.
    #[must_use]
    pub const fn hashtag(&self) -> &Hashtag {
        &self.hashtag
    }
}
