//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

use std::time::Duration;

/// Storage configuration
pub mod storage {
    use super::*;

    /// Database file name inside the data directory
    pub const DATABASE_FILE_NAME: &str = "doesaegim.db";

    /// How long SQLite waits on a locked database before failing
    pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

    /// Format used to persist plan timestamps; sorts lexicographically.
    /// The fraction is omitted for whole seconds.
    pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    /// Format used to persist travel dates
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Section header configuration
pub mod section {
    /// Date part of a section key, e.g. `22.11.16`
    pub const DATE_FORMAT: &str = "%y.%m.%d";

    /// Korean weekday abbreviations, Monday first
    pub const KOREAN_WEEKDAYS: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

    /// English weekday abbreviations, Monday first
    pub const ENGLISH_WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
}

/// Filesystem layout
pub mod fs {
    /// Config directory name
    pub const CONFIG_DIR_NAME: &str = ".doesaegim";

    /// Logs subdirectory name
    pub const LOGS_DIR_NAME: &str = "logs";

    /// Config file name
    pub const CONFIG_FILE_NAME: &str = "config.toml";
}
