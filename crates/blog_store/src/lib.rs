//! Persistence core for the blog: posts, comments and their SQLite storage.
//! This crate owns schema, seed content and the repository invariants.

pub mod api;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use config::{LogConfig, StoreConfig};
pub use db::{acquire_store, configure_store, DbError, DbResult, Store};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::comment::{Comment, CommentId, NewComment};
pub use model::post::{join_tags, split_tags, NewPost, Post, PostId, PostPatch};
pub use model::time::Timestamp;
pub use repo::comment_repo::{CommentRepository, SqliteCommentRepository};
pub use repo::post_repo::{PostRepository, SqlitePostRepository};
pub use repo::{RepoError, RepoResult};

/// Returns the crate version.
pub fn store_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::store_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!store_version().is_empty());
    }
}
