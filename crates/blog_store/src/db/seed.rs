//! Example content inserted into an empty store.
//!
//! # Invariants
//! - Rows are inserted only when `posts` is empty; existing content of any
//!   shape turns the loader into a no-op.
//! - Example `i` (0-based) is stamped `i` days before `now`, newest first.

use super::DbResult;
use crate::model::time::{format_timestamp, to_storage_precision, Timestamp};
use chrono::Duration;
use log::info;
use rusqlite::{params, Connection};
use uuid::Uuid;

struct SeedPost {
    title: &'static str,
    content: &'static str,
    excerpt: &'static str,
    tags: &'static str,
}

const SEED_POSTS: [SeedPost; 3] = [
    SeedPost {
        title: "Getting Started with Rust",
        content: "Rust is a systems language that gives you control over memory without a garbage collector. \
In this post we walk through installing the toolchain and building a first project with Cargo.\n\n\
Cargo takes care of:\n\
- Creating new projects\n\
- Resolving and building dependencies\n\
- Running tests and benchmarks\n\
- Generating documentation\n\n\
Once the toolchain is in place, `cargo new` gives you a working binary in seconds.",
        excerpt: "Install the toolchain and build your first Rust project with Cargo.",
        tags: "rust,cargo,getting-started",
    },
    SeedPost {
        title: "Understanding Ownership and Borrowing",
        content: "Ownership is the rule set that lets Rust free memory deterministically. \
Every value has a single owner, and references borrow it for a bounded scope.\n\n\
The core rules are:\n\
- Each value has exactly one owner\n\
- Any number of shared borrows, or one mutable borrow\n\
- References never outlive the value they point to\n\n\
The borrow checker enforces these rules at compile time, which removes a whole class of bugs.",
        excerpt: "How ownership and borrowing let Rust manage memory safely at compile time.",
        tags: "rust,ownership,memory",
    },
    SeedPost {
        title: "Persisting Data with SQLite",
        content: "SQLite is an embedded database that stores everything in a single file. \
It pairs well with small services and desktop tools.\n\n\
Why it works well for a blog:\n\
- No separate server process\n\
- Foreign keys with cascading deletes\n\
- Transactions around every write\n\
- Easy backups by copying one file\n\n\
With a thin repository layer on top, the rest of the application never sees SQL.",
        excerpt: "Why an embedded SQLite file is a good home for blog posts and comments.",
        tags: "sqlite,database,storage",
    },
];

/// Number of example posts inserted into an empty store.
pub const SEED_POST_COUNT: usize = SEED_POSTS.len();

/// Inserts the example posts when `posts` is empty.
///
/// Returns the number of inserted rows: `SEED_POST_COUNT` on an empty store,
/// `0` otherwise. Callers run this inside the bootstrap transaction so the
/// count check and the inserts are seen atomically.
pub fn seed_if_empty(conn: &Connection, now: Timestamp) -> DbResult<usize> {
    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM posts;", [], |row| row.get(0))?;
    if existing > 0 {
        info!("event=seed_load module=db status=skipped existing_posts={existing}");
        return Ok(0);
    }

    let newest = to_storage_precision(now);
    let mut stmt = conn.prepare(
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
    )?;

    for (days_back, post) in (0_i64..).zip(SEED_POSTS.iter()) {
        let stamp = format_timestamp(newest - Duration::days(days_back));
        stmt.execute(params![
            Uuid::new_v4().to_string(),
            post.title,
            post.content,
            post.excerpt,
            post.tags,
            stamp,
            stamp,
            stamp,
        ])?;
    }

    info!("event=seed_load module=db status=ok inserted_posts={SEED_POST_COUNT}");
    Ok(SEED_POST_COUNT)
}

#[cfg(test)]
mod tests {
    use super::{seed_if_empty, SEED_POST_COUNT};
    use crate::db::schema::ensure_schema;
    use chrono::{TimeZone, Utc};
    use rusqlite::Connection;

    #[test]
    fn seeds_once_with_one_day_steps() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 5, 20, 12, 0, 0).unwrap();

        assert_eq!(seed_if_empty(&conn, now).unwrap(), SEED_POST_COUNT);
        assert_eq!(seed_if_empty(&conn, now).unwrap(), 0);

        let mut stmt = conn
            .prepare("SELECT publish_date, created_at, updated_at FROM posts ORDER BY publish_date DESC;")
            .unwrap();
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        let publish_dates: Vec<&str> = rows.iter().map(|row| row.0.as_str()).collect();
        assert_eq!(
            publish_dates,
            vec![
                "2026-05-20T12:00:00.000Z",
                "2026-05-19T12:00:00.000Z",
                "2026-05-18T12:00:00.000Z",
            ]
        );
        for (publish, created, updated) in &rows {
            assert_eq!(publish, created);
            assert_eq!(created, updated);
        }
    }

    #[test]
    fn skips_when_any_post_exists() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO posts (id, title, content, excerpt, tags, publish_date, created_at, updated_at)
             VALUES ('x', '', '', '', NULL, 'not a date', 'not a date', 'not a date');",
            [],
        )
        .unwrap();

        assert_eq!(seed_if_empty(&conn, Utc::now()).unwrap(), 0);
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM posts;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
