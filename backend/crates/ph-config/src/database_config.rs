use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME};

use std::path::Path;

use serde::Deserialize;

/// Where the user records live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the config directory
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::database("database.path cannot be empty"));
        }

        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
