//! Environment-driven settings for the store and logging.
//!
//! | variable         | default                                  |
//! |------------------|------------------------------------------|
//! | `BLOG_DB_PATH`   | `blog.db` in the working directory       |
//! | `BLOG_LOG_LEVEL` | `debug` (debug builds) / `info` (release) |
//! | `BLOG_LOG_DIR`   | unset: logging is not initialized         |
//!
//! Blank values count as unset.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "BLOG_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "BLOG_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "BLOG_LOG_DIR";
pub const DEFAULT_DB_FILE_NAME: &str = "blog.db";

/// Location of the database file backing the process-wide store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
}

impl StoreConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Reads `BLOG_DB_PATH`, falling back to `blog.db` under the working
    /// directory.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = non_blank(lookup(DB_PATH_ENV))
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);
        Self { db_path }
    }
}

/// Logging settings; `log_dir = None` means logging stays off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub log_dir: Option<PathBuf>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            level: non_blank(lookup(LOG_LEVEL_ENV))
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: non_blank(lookup(LOG_DIR_ENV)).map(PathBuf::from),
        }
    }
}

fn default_db_path() -> PathBuf {
    std::env::current_dir()
        .map(|dir| dir.join(DEFAULT_DB_FILE_NAME))
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_FILE_NAME))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{LogConfig, StoreConfig, DB_PATH_ENV, DEFAULT_DB_FILE_NAME, LOG_DIR_ENV};
    use std::path::PathBuf;

    #[test]
    fn store_config_prefers_env_path() {
        let config = StoreConfig::from_lookup(|key| {
            (key == DB_PATH_ENV).then(|| " /tmp/blog-test.db ".to_string())
        });
        assert_eq!(config.db_path, PathBuf::from("/tmp/blog-test.db"));
    }

    #[test]
    fn store_config_treats_blank_as_unset() {
        let config = StoreConfig::from_lookup(|_| Some("   ".to_string()));
        assert!(config.db_path.ends_with(DEFAULT_DB_FILE_NAME));
    }

    #[test]
    fn log_config_defaults_to_disabled() {
        let config = LogConfig::from_lookup(|_| None);
        assert!(config.log_dir.is_none());
        assert!(!config.level.is_empty());

        let enabled = LogConfig::from_lookup(|key| {
            (key == LOG_DIR_ENV).then(|| "/var/log/blog".to_string())
        });
        assert_eq!(enabled.log_dir, Some(PathBuf::from("/var/log/blog")));
    }
}
