//! Repository contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define post/comment data access contracts.
//! - Isolate SQLite query details from callers.
//!
//! # Invariants
//! - Absence is reported as `None`/`false`, never as an error.
//! - Read paths reject malformed persisted rows instead of masking them.
//! - Every write returns its outcome; failures are never swallowed.

use crate::db::DbError;
use crate::model::post::PostId;
use crate::model::time::{parse_timestamp, Timestamp};
use rusqlite::{ErrorCode, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod comment_repo;
pub mod post_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for post/comment persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// A comment referenced a post that does not exist.
    MissingPost(PostId),
    /// Caller-supplied value that cannot be stored in sortable form.
    InvalidInput(String),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingPost(id) => write!(f, "post not found for comment: {id}"),
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::MissingPost(_) => None,
            Self::InvalidInput(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation
                && failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
    )
}

fn read_uuid(row: &Row<'_>, column: &'static str) -> RepoResult<Uuid> {
    let text: String = row.get(column)?;
    Uuid::parse_str(&text)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{text}` in {column}")))
}

fn read_timestamp(row: &Row<'_>, column: &'static str) -> RepoResult<Timestamp> {
    let text: String = row.get(column)?;
    parse_timestamp(&text)
        .ok_or_else(|| RepoError::InvalidData(format!("invalid timestamp `{text}` in {column}")))
}
