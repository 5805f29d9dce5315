use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, PublicProfileConfig, ServerConfig, UploadConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

/// Process-wide configuration, loaded once at start and never mutated.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub public_profile: PublicProfileConfig,
    pub uploads: UploadConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Load `.env` from the working directory if present
    /// 2. Check for PH_CONFIG_DIR env var, else use ./.ph/
    /// 3. Auto-create config directory if it doesn't exist
    /// 4. Load config.toml if it exists, else use defaults
    /// 5. Apply PH_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PH_CONFIG_DIR env var > ./.ph/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.logging.validate()?;
        self.public_profile.validate()?;
        self.uploads.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Get absolute path to the uploaded image directory.
    pub fn uploads_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.uploads.dir))
    }

    /// Get absolute path to the log file, `None` when logging to stdout.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        Ok(self.logging.file_path(&Self::config_dir()?))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!("  public_profile: base_url={}", self.public_profile.base_url);
        info!(
            "  uploads: dir={}, url_prefix=/{}, max_bytes={}",
            self.uploads.dir,
            self.uploads.url_segment(),
            self.uploads.max_bytes
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PH_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PH_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("PH_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("PH_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PH_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PH_LOG_FILE", &mut self.logging.file);

        // Public profile
        Self::apply_env_string("PH_PUBLIC_BASE_URL", &mut self.public_profile.base_url);

        // Uploads
        Self::apply_env_string("PH_UPLOADS_DIR", &mut self.uploads.dir);
        Self::apply_env_string("PH_UPLOADS_URL_PREFIX", &mut self.uploads.url_prefix);
        Self::apply_env_parse("PH_UPLOADS_MAX_BYTES", &mut self.uploads.max_bytes);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
