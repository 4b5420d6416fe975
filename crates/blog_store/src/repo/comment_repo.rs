//! Comment repository contract and SQLite implementation.
//!
//! # Invariants
//! - Comments are append-only; there is no update path.
//! - Reads do not check that the parent post exists.
//! - Inserts rely on the FK constraint to reject unknown posts.

use super::{is_foreign_key_violation, read_timestamp, read_uuid, RepoError, RepoResult};
use crate::model::comment::{Comment, CommentId, NewComment};
use crate::model::post::PostId;
use crate::model::time::{self, format_timestamp};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

/// Repository interface for comment operations.
pub trait CommentRepository {
    /// Lists comments of one post, newest first.
    fn list_comments(&self, post_id: PostId) -> RepoResult<Vec<Comment>>;
    /// Persists a comment; fails with `RepoError::MissingPost` for unknown posts.
    fn create_comment(&self, input: &NewComment) -> RepoResult<Comment>;
    fn delete_comment(&self, id: CommentId) -> RepoResult<bool>;
}

/// SQLite-backed comment repository.
pub struct SqliteCommentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCommentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CommentRepository for SqliteCommentRepository<'_> {
    fn list_comments(&self, post_id: PostId) -> RepoResult<Vec<Comment>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                id,
                post_id,
                author,
                content,
                created_at
             FROM comments
             WHERE post_id = ?1
             ORDER BY created_at DESC, id ASC;",
        )?;
        let mut rows = stmt.query([post_id.to_string()])?;
        let mut comments = Vec::new();
        while let Some(row) = rows.next()? {
            comments.push(parse_comment_row(row)?);
        }
        Ok(comments)
    }

    fn create_comment(&self, input: &NewComment) -> RepoResult<Comment> {
        let comment = Comment {
            id: Uuid::new_v4(),
            post_id: input.post_id,
            author: input.author.clone(),
            content: input.content.clone(),
            created_at: time::now(),
        };

        let inserted = self.conn.execute(
            "INSERT INTO comments (
                id,
                post_id,
                author,
                content,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                comment.id.to_string(),
                comment.post_id.to_string(),
                comment.author.as_str(),
                comment.content.as_str(),
                format_timestamp(comment.created_at),
            ],
        );

        match inserted {
            Ok(_) => Ok(comment),
            Err(err) if is_foreign_key_violation(&err) => Err(RepoError::MissingPost(input.post_id)),
            Err(err) => Err(err.into()),
        }
    }

    fn delete_comment(&self, id: CommentId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM comments WHERE id = ?1;", [id.to_string()])?;
        Ok(changed > 0)
    }
}

fn parse_comment_row(row: &Row<'_>) -> RepoResult<Comment> {
    Ok(Comment {
        id: read_uuid(row, "id")?,
        post_id: read_uuid(row, "post_id")?,
        author: row.get("author")?,
        content: row.get("content")?,
        created_at: read_timestamp(row, "created_at")?,
    })
}
