//! Post repository contract and SQLite implementation.
//!
//! # Responsibility
//! - CRUD over the `posts` table.
//! - Assemble partial updates touching exactly the supplied columns.
//!
//! # Invariants
//! - Listings are ordered by `publish_date DESC, id ASC`.
//! - An update always refreshes `updated_at`, never below `created_at`.
//! - Deleting a post removes its comments through the FK cascade.

use super::{read_timestamp, read_uuid, RepoError, RepoResult};
use crate::model::post::{NewPost, Post, PostId, PostPatch};
use crate::model::time::{self, format_timestamp, is_storable, to_storage_precision, Timestamp};
use log::debug;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use uuid::Uuid;

const POST_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    excerpt,
    tags,
    publish_date,
    created_at,
    updated_at
FROM posts";

/// Repository interface for post operations.
pub trait PostRepository {
    /// Lists every post, newest `publish_date` first.
    fn list_posts(&self) -> RepoResult<Vec<Post>>;
    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>>;
    /// Persists a new post with generated id and audit timestamps.
    fn create_post(&self, input: &NewPost) -> RepoResult<Post>;
    /// Applies `patch`; returns `false` when no post has `id`.
    fn update_post(&self, id: PostId, patch: &PostPatch) -> RepoResult<bool>;
    /// Deletes the post and its comments; returns `false` when absent.
    fn delete_post(&self, id: PostId) -> RepoResult<bool>;
}

/// SQLite-backed post repository.
pub struct SqlitePostRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePostRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PostRepository for SqlitePostRepository<'_> {
    fn list_posts(&self) -> RepoResult<Vec<Post>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POST_SELECT_SQL} ORDER BY publish_date DESC, id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut posts = Vec::new();
        while let Some(row) = rows.next()? {
            posts.push(parse_post_row(row)?);
        }
        Ok(posts)
    }

    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POST_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_post_row(row)?));
        }
        Ok(None)
    }

    fn create_post(&self, input: &NewPost) -> RepoResult<Post> {
        ensure_storable_publish_date(input.publish_date)?;
        let now = time::now();
        let post = Post {
            id: Uuid::new_v4(),
            title: input.title.clone(),
            content: input.content.clone(),
            excerpt: input.excerpt.clone(),
            tags: input.tags.clone(),
            publish_date: to_storage_precision(input.publish_date),
            created_at: now,
            updated_at: now,
        };

        self.conn.execute(
            "INSERT INTO posts (
                id,
                title,
                content,
                excerpt,
                tags,
                publish_date,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                post.id.to_string(),
                post.title.as_str(),
                post.content.as_str(),
                post.excerpt.as_str(),
                post.tags.as_deref(),
                format_timestamp(post.publish_date),
                format_timestamp(post.created_at),
                format_timestamp(post.updated_at),
            ],
        )?;

        Ok(post)
    }

    fn update_post(&self, id: PostId, patch: &PostPatch) -> RepoResult<bool> {
        if let Some(publish_date) = patch.publish_date {
            ensure_storable_publish_date(publish_date)?;
        }
        if patch.is_empty() {
            debug!("event=post_update module=repo status=touch_only id={id}");
        }
        let (sql, values) = build_update_statement(id, patch, time::now());
        let changed = self.conn.execute(&sql, params_from_iter(values))?;
        Ok(changed > 0)
    }

    fn delete_post(&self, id: PostId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM posts WHERE id = ?1;", [id.to_string()])?;
        Ok(changed > 0)
    }
}

fn ensure_storable_publish_date(publish_date: Timestamp) -> RepoResult<()> {
    if is_storable(publish_date) {
        return Ok(());
    }
    Err(RepoError::InvalidInput(format!(
        "publish_date `{publish_date}` is outside years 0000..=9999"
    )))
}

/// Columns and values present in `patch`, in column declaration order.
fn patch_assignments(patch: &PostPatch) -> Vec<(&'static str, Value)> {
    let mut assignments = Vec::new();
    if let Some(title) = &patch.title {
        assignments.push(("title", Value::Text(title.clone())));
    }
    if let Some(content) = &patch.content {
        assignments.push(("content", Value::Text(content.clone())));
    }
    if let Some(excerpt) = &patch.excerpt {
        assignments.push(("excerpt", Value::Text(excerpt.clone())));
    }
    if let Some(tags) = &patch.tags {
        let value = tags.clone().map_or(Value::Null, Value::Text);
        assignments.push(("tags", value));
    }
    if let Some(publish_date) = patch.publish_date {
        let stamp = format_timestamp(to_storage_precision(publish_date));
        assignments.push(("publish_date", Value::Text(stamp)));
    }
    assignments
}

/// Builds `UPDATE posts SET <present columns>, updated_at = .. WHERE id = ..`.
///
/// Placeholders are numbered in the order values are returned; the id is
/// always the last bound value.
fn build_update_statement(
    id: PostId,
    patch: &PostPatch,
    updated_at: Timestamp,
) -> (String, Vec<Value>) {
    let assignments = patch_assignments(patch);
    let mut set_clause = Vec::with_capacity(assignments.len() + 1);
    let mut values = Vec::with_capacity(assignments.len() + 2);

    for (column, value) in assignments {
        values.push(value);
        set_clause.push(format!("{column} = ?{}", values.len()));
    }

    values.push(Value::Text(format_timestamp(updated_at)));
    set_clause.push(format!("updated_at = MAX(?{}, created_at)", values.len()));

    values.push(Value::Text(id.to_string()));
    let sql = format!(
        "UPDATE posts SET {} WHERE id = ?{};",
        set_clause.join(", "),
        values.len()
    );

    (sql, values)
}

fn parse_post_row(row: &Row<'_>) -> RepoResult<Post> {
    Ok(Post {
        id: read_uuid(row, "id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        excerpt: row.get("excerpt")?,
        tags: row.get("tags")?,
        publish_date: read_timestamp(row, "publish_date")?,
        created_at: read_timestamp(row, "created_at")?,
        updated_at: read_timestamp(row, "updated_at")?,
    })
}

#[cfg(test)]
mod tests {
    use super::build_update_statement;
    use crate::model::post::PostPatch;
    use chrono::{TimeZone, Utc};
    use rusqlite::types::Value;
    use uuid::Uuid;

    #[test]
    fn empty_patch_only_sets_updated_at() {
        let id = Uuid::new_v4();
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let (sql, values) = build_update_statement(id, &PostPatch::default(), now);

        assert_eq!(
            sql,
            "UPDATE posts SET updated_at = MAX(?1, created_at) WHERE id = ?2;"
        );
        assert_eq!(
            values,
            vec![
                Value::Text("2026-01-02T03:04:05.000Z".to_string()),
                Value::Text(id.to_string()),
            ]
        );
    }

    #[test]
    fn present_fields_bind_in_column_order_with_id_last() {
        let id = Uuid::new_v4();
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let patch = PostPatch::default()
            .with_publish_date(now)
            .with_title("New title")
            .clear_tags();
        let (sql, values) = build_update_statement(id, &patch, now);

        assert_eq!(
            sql,
            "UPDATE posts SET title = ?1, tags = ?2, publish_date = ?3, \
             updated_at = MAX(?4, created_at) WHERE id = ?5;"
        );
        assert_eq!(values.len(), 5);
        assert_eq!(values[0], Value::Text("New title".to_string()));
        assert_eq!(values[1], Value::Null);
        assert_eq!(values[4], Value::Text(id.to_string()));
    }
}
