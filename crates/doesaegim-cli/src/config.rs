//! Configuration file management
//!
//! Provides a TOML config file at `~/.doesaegim/config.toml` and a resolution
//! chain for the database path: CLI flag > env var > config file > default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use doesaegim_core::paths;
use doesaegim_core::view_model::{SectionDateFormatter, WeekdayLabels};

/// Environment variable overriding the database path
pub const DATABASE_ENV_VAR: &str = "DOESAEGIM_DB";

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub database: DatabaseSection,
    pub display: DisplaySection,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Weekday language in section headers ("korean" or "english")
    pub weekday_labels: WeekdayLabels,
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load the config file at `path`; a missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))
}

/// Load the config file from its default location
pub fn load_config() -> Result<ConfigFile> {
    load_config_from(&paths::config_file())
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config_to(path: &Path, config: &ConfigFile) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create config directory {}", dir.display()))?;
    }
    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub formatter: SectionDateFormatter,
}

impl AppConfig {
    /// Resolve using the chain: CLI flag > env var > config file > default.
    pub fn resolve(cli_db: Option<PathBuf>, env_db: Option<String>, file: &ConfigFile) -> Self {
        let database_path = cli_db
            .or_else(|| env_db.filter(|v| !v.is_empty()).map(PathBuf::from))
            .or_else(|| file.database.path.clone())
            .unwrap_or_else(paths::default_database_path);

        Self {
            database_path,
            formatter: SectionDateFormatter::new(file.display.weekday_labels),
        }
    }
}
