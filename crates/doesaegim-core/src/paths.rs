//! Well-known filesystem locations
//!
//! Everything lives under `~/.doesaegim`, falling back to the current
//! directory when no home directory can be resolved.

use std::path::PathBuf;

use crate::constants::fs::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, LOGS_DIR_NAME};
use crate::constants::storage::DATABASE_FILE_NAME;

/// Root directory for config, logs, and the default database
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Directory for log files
pub fn logs_dir() -> PathBuf {
    config_dir().join(LOGS_DIR_NAME)
}

/// Path of the TOML config file
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Default SQLite database location
pub fn default_database_path() -> PathBuf {
    config_dir().join(DATABASE_FILE_NAME)
}
