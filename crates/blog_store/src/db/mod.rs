//! SQLite storage bootstrap: connection setup, schema and seed content.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the blog store.
//! - Create the `posts`/`comments` schema when absent and seed example posts.
//! - Own the process-wide store handle shared by the `api` functions.
//!
//! # Invariants
//! - Every returned connection has `foreign_keys=ON`.
//! - Repository code never touches a connection before schema + seed ran.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod handle;
mod open;
pub mod schema;
pub mod seed;

pub use handle::{acquire_store, configure_store, Store};
pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The process-wide store is already bound to a different database file.
    AlreadyConfigured {
        active: PathBuf,
        requested: PathBuf,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::AlreadyConfigured { active, requested } => write!(
                f,
                "store already configured for `{}`; refusing to switch to `{}`",
                active.display(),
                requested.display()
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::AlreadyConfigured { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
