use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_UPLOAD_MAX_BYTES, DEFAULT_UPLOADS_DIRECTORY,
    DEFAULT_UPLOADS_URL_PREFIX, MAX_UPLOAD_MAX_BYTES, MIN_UPLOAD_MAX_BYTES,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Image directory, relative to the config directory
    pub dir: String,
    /// URL path segment stored images are served under
    pub url_prefix: String,
    /// Largest accepted request body for profile updates
    pub max_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_UPLOADS_DIRECTORY),
            url_prefix: String::from(DEFAULT_UPLOADS_URL_PREFIX),
            max_bytes: DEFAULT_UPLOAD_MAX_BYTES,
        }
    }
}

impl UploadConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::uploads(
                "uploads.dir must be relative and cannot contain '..'",
            ));
        }

        let prefix = self.url_prefix.trim_matches('/');
        if prefix.is_empty() || prefix.contains("..") || prefix.contains(char::is_whitespace) {
            return Err(ConfigError::uploads(format!(
                "uploads.url_prefix must be a non-empty path segment, got '{}'",
                self.url_prefix
            )));
        }

        if !(MIN_UPLOAD_MAX_BYTES..=MAX_UPLOAD_MAX_BYTES).contains(&self.max_bytes) {
            return Err(ConfigError::uploads(format!(
                "uploads.max_bytes must be {}-{}, got {}",
                MIN_UPLOAD_MAX_BYTES, MAX_UPLOAD_MAX_BYTES, self.max_bytes
            )));
        }

        Ok(())
    }

    /// URL prefix without surrounding slashes, e.g. `uploads`
    pub fn url_segment(&self) -> &str {
        self.url_prefix.trim_matches('/')
    }
}
