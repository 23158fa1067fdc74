//! # Configuration
//!
//! Settings resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--db`, `--json`, `--verbose`)
//! 2. Environment variables (`STOCKROOM_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after startup.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::CliError;

/// Environment variable overriding the database path.
pub const DB_PATH_ENV: &str = "STOCKROOM_DB_PATH";

/// Environment variable enabling JSON output (`1` or `true`).
pub const JSON_ENV: &str = "STOCKROOM_JSON";

/// Front end configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Database file. `None` means the platform default.
    pub db_path: Option<PathBuf>,

    /// Print results as JSON instead of tables.
    pub json: bool,

    /// Raise the default log level.
    pub verbose: bool,
}

impl AppConfig {
    /// Reads `STOCKROOM_*` environment variables over the defaults.
    pub fn from_env() -> Self {
        let mut config = AppConfig::default();

        if let Ok(path) = std::env::var(DB_PATH_ENV) {
            if !path.trim().is_empty() {
                config.db_path = Some(PathBuf::from(path));
            }
        }

        if let Ok(json) = std::env::var(JSON_ENV) {
            config.json = parse_flag(&json);
        }

        config
    }

    /// Applies command-line flags on top of this configuration.
    pub fn with_overrides(mut self, db: Option<PathBuf>, json: bool, verbose: bool) -> Self {
        if db.is_some() {
            self.db_path = db;
        }
        self.json |= json;
        self.verbose |= verbose;
        self
    }

    /// Path of the database file to open.
    ///
    /// ## Platform-Specific Defaults
    /// - **Linux**: `~/.local/share/stockroom/stockroom.db`
    /// - **macOS**: `~/Library/Application Support/com.stockroom.stockroom/stockroom.db`
    /// - **Windows**: `%APPDATA%\stockroom\stockroom\data\stockroom.db`
    ///
    /// The data directory is created if missing. An explicit path is used
    /// as-is.
    pub fn database_path(&self) -> Result<PathBuf, CliError> {
        if let Some(path) = &self.db_path {
            return Ok(path.clone());
        }

        let proj_dirs = ProjectDirs::from("com", "stockroom", "stockroom")
            .ok_or_else(|| CliError::internal("Could not determine app data directory"))?;

        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir).map_err(|e| {
            CliError::internal(format!(
                "Could not create {}: {}",
                data_dir.display(),
                e
            ))
        })?;

        Ok(data_dir.join("stockroom.db"))
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
