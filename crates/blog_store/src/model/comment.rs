//! Comment domain model.
//!
//! Comments are append-only: created once, removed by direct delete or by the
//! cascade from their parent post.

use crate::model::post::PostId;
use crate::model::time::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type CommentId = Uuid;

/// Persisted reader comment attached to exactly one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub author: String,
    pub content: String,
    pub created_at: Timestamp,
}

/// Input for creating a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub post_id: PostId,
    pub author: String,
    pub content: String,
}
