//! Post domain model.
//!
//! # Responsibility
//! - Define the persisted post record and its create/patch inputs.
//! - Provide the comma-separated tag helpers used by presentation callers.
//!
//! # Invariants
//! - `id` is generated by the repository and never changes.
//! - `updated_at >= created_at`.
//! - `tags` is free-form text; no normalization or deduplication.

use crate::model::time::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a post.
pub type PostId = Uuid;

/// Persisted blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    /// Markdown/plain body.
    pub content: String,
    /// Short summary shown on listings.
    pub excerpt: String,
    /// Comma-separated labels, `None` when the post has no tags.
    pub tags: Option<String>,
    /// Caller-supplied; sole ordering key for listings.
    pub publish_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Post {
    /// Splits `tags` into its labels.
    ///
    /// Segments are trimmed and empty segments are skipped; order and
    /// duplicates are preserved.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags.as_deref().map(split_tags).unwrap_or_default()
    }
}

/// Input for creating a post. Identity and audit timestamps are assigned by
/// the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    #[serde(default)]
    pub tags: Option<String>,
    pub publish_date: Timestamp,
}

/// Partial update for a post.
///
/// Each `Some` field is written; `None` fields keep their stored value.
/// `tags` is doubly optional: `Some(None)` clears the column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<Option<String>>,
    pub publish_date: Option<Timestamp>,
}

impl PostPatch {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(Some(tags.into()));
        self
    }

    pub fn clear_tags(mut self) -> Self {
        self.tags = Some(None);
        self
    }

    pub fn with_publish_date(mut self, publish_date: Timestamp) -> Self {
        self.publish_date = Some(publish_date);
        self
    }

    /// Returns whether no mutable field is set; applying an empty patch only
    /// refreshes `updated_at`.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.excerpt.is_none()
            && self.tags.is_none()
            && self.publish_date.is_none()
    }
}

/// Splits stored tag text into labels.
pub fn split_tags(tags: &str) -> Vec<&str> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Joins labels into stored tag text. Returns `None` for an empty list so the
/// column is stored as NULL.
pub fn join_tags<S: AsRef<str>>(tags: &[S]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    Some(
        tags.iter()
            .map(|tag| tag.as_ref().trim())
            .collect::<Vec<_>>()
            .join(","),
    )
}

#[cfg(test)]
mod tests {
    use super::{join_tags, split_tags, PostPatch};

    #[test]
    fn split_tags_trims_and_skips_blank_segments() {
        assert_eq!(split_tags("rust, sqlite,,  "), vec!["rust", "sqlite"]);
        assert_eq!(split_tags("a,a"), vec!["a", "a"]);
        assert!(split_tags("").is_empty());
    }

    #[test]
    fn join_tags_produces_comma_text_or_none() {
        assert_eq!(join_tags(&["rust", " web "]).as_deref(), Some("rust,web"));
        assert_eq!(join_tags::<&str>(&[]), None);
    }

    #[test]
    fn patch_builders_mark_fields_present() {
        assert!(PostPatch::default().is_empty());

        let patch = PostPatch::default().with_title("t").clear_tags();
        assert!(!patch.is_empty());
        assert_eq!(patch.title.as_deref(), Some("t"));
        assert_eq!(patch.tags, Some(None));
        assert!(patch.content.is_none());
    }
}
