//! Schema creation for posts and comments.
//!
//! # Invariants
//! - Every statement is `IF NOT EXISTS`; running it on a ready store is a no-op.
//! - `comments.post_id` cascades on parent delete. The cascade only fires on
//!   connections with `foreign_keys=ON`, which `db::open` guarantees.

use super::DbResult;
use log::debug;
use rusqlite::Connection;

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS posts (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    excerpt TEXT NOT NULL,
    tags TEXT,
    publish_date TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS comments (
    id TEXT PRIMARY KEY,
    post_id TEXT NOT NULL,
    author TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at TEXT NOT NULL,
    FOREIGN KEY (post_id) REFERENCES posts(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_comments_post_created
    ON comments (post_id, created_at);
";

/// Tables owned by the blog store, in creation order.
pub const TABLES: [&str; 2] = ["posts", "comments"];

/// Creates the blog tables if they are absent.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    debug!("event=schema_ensure module=db status=ok tables={}", TABLES.len());
    Ok(())
}
