//! Process-wide store handle.
//!
//! # Invariants
//! - At most one caller runs open + schema + seed per process; concurrent
//!   first callers block on the `OnceCell` until it finishes.
//! - The database path is fixed by the first `configure_store` call, or by
//!   `StoreConfig::from_env` on first access, and never changes afterwards.
//! - The connection lives for the rest of the process.

use super::open::open_db;
use super::{DbError, DbResult};
use crate::config::StoreConfig;
use log::info;
use once_cell::sync::OnceCell;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

static STORE_CONFIG: OnceCell<StoreConfig> = OnceCell::new();
static STORE: OnceCell<Store> = OnceCell::new();

/// Shared, initialized connection to the blog database.
pub struct Store {
    path: PathBuf,
    conn: Mutex<Connection>,
}

impl Store {
    /// Database file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs `f` with exclusive access to the shared connection.
    pub fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> T) -> T {
        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        f(&conn)
    }
}

/// Binds the process-wide store to `config.db_path`.
///
/// Must happen before the first `acquire_store`. Repeating the same path is a
/// no-op.
///
/// # Errors
/// - `DbError::AlreadyConfigured` when a different path is already bound,
///   including the environment default bound by an earlier `acquire_store`.
pub fn configure_store(config: StoreConfig) -> DbResult<()> {
    let requested = config.db_path.clone();
    let active = STORE_CONFIG.get_or_init(|| config);
    if active.db_path != requested {
        return Err(DbError::AlreadyConfigured {
            active: active.db_path.clone(),
            requested,
        });
    }
    Ok(())
}

/// Returns the process-wide store, opening and bootstrapping it on first use.
///
/// # Errors
/// - Returns the open/schema/seed failure of the initializing call. The
///   failure is not cached; a later call attempts initialization again.
pub fn acquire_store() -> DbResult<&'static Store> {
    STORE.get_or_try_init(|| {
        let config = STORE_CONFIG.get_or_init(StoreConfig::from_env);
        let conn = open_db(&config.db_path)?;
        info!(
            "event=store_acquire module=db status=ok path={}",
            config.db_path.display()
        );
        Ok(Store {
            path: config.db_path.clone(),
            conn: Mutex::new(conn),
        })
    })
}
