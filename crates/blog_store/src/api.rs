//! Process-level blog operations over the shared store.
//!
//! Each function acquires the process-wide store (bootstrapping it on the
//! first call), borrows its connection and runs one repository statement.
//! These are the entry points the presentation layer calls.

use crate::db::acquire_store;
use crate::model::comment::{Comment, CommentId, NewComment};
use crate::model::post::{NewPost, Post, PostId, PostPatch};
use crate::repo::comment_repo::{CommentRepository, SqliteCommentRepository};
use crate::repo::post_repo::{PostRepository, SqlitePostRepository};
use crate::repo::RepoResult;

pub fn get_all_posts() -> RepoResult<Vec<Post>> {
    with_posts(|repo| repo.list_posts())
}

pub fn get_post_by_id(id: PostId) -> RepoResult<Option<Post>> {
    with_posts(|repo| repo.get_post(id))
}

pub fn create_post(input: &NewPost) -> RepoResult<Post> {
    with_posts(|repo| repo.create_post(input))
}

/// Returns `false` when no post has `id`.
pub fn update_post(id: PostId, patch: &PostPatch) -> RepoResult<bool> {
    with_posts(|repo| repo.update_post(id, patch))
}

/// Deletes the post together with its comments.
pub fn delete_post(id: PostId) -> RepoResult<bool> {
    with_posts(|repo| repo.delete_post(id))
}

pub fn get_comments_by_post_id(post_id: PostId) -> RepoResult<Vec<Comment>> {
    with_comments(|repo| repo.list_comments(post_id))
}

pub fn create_comment(input: &NewComment) -> RepoResult<Comment> {
    with_comments(|repo| repo.create_comment(input))
}

pub fn delete_comment(id: CommentId) -> RepoResult<bool> {
    with_comments(|repo| repo.delete_comment(id))
}

fn with_posts<T>(f: impl FnOnce(&SqlitePostRepository<'_>) -> RepoResult<T>) -> RepoResult<T> {
    let store = acquire_store()?;
    store.with_conn(|conn| f(&SqlitePostRepository::new(conn)))
}

fn with_comments<T>(
    f: impl FnOnce(&SqliteCommentRepository<'_>) -> RepoResult<T>,
) -> RepoResult<T> {
    let store = acquire_store()?;
    store.with_conn(|conn| f(&SqliteCommentRepository::new(conn)))
}
