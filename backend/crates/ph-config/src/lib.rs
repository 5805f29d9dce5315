mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod public_profile_config;
mod server_config;
mod upload_config;


pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use public_profile_config::PublicProfileConfig;
pub use server_config::ServerConfig;
pub use upload_config::UploadConfig;

const CONFIG_DIR_ENV: &str = "PH_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".ph";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8081;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "profiles.db";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:3000/public-profile";

const DEFAULT_UPLOADS_DIRECTORY: &str = "uploads";
const DEFAULT_UPLOADS_URL_PREFIX: &str = "uploads";
const DEFAULT_UPLOAD_MAX_BYTES: usize = 5 * 1024 * 1024;
const MIN_UPLOAD_MAX_BYTES: usize = 1024;
const MAX_UPLOAD_MAX_BYTES: usize = 100 * 1024 * 1024;
