use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL, LogLevel};

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log directory, relative to the config directory
    pub dir: String,
    /// Log file name inside `dir`; stdout when unset
    pub file: Option<String>,
    /// Colored stdout output (ignored for file output)
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
            colored: true,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::logging(
                "logging.dir must be relative and cannot contain '..'",
            ));
        }

        if let Some(file) = &self.file
            && (file.trim().is_empty() || file.contains(['/', '\\']) || file == "..")
        {
            return Err(ConfigError::logging(format!(
                "logging.file must be a plain file name, got '{}'",
                file
            )));
        }

        Ok(())
    }

    /// Log file location under `config_dir`, or `None` for stdout
    pub fn file_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.file
            .as_ref()
            .map(|file| config_dir.join(&self.dir).join(file))
    }
}
