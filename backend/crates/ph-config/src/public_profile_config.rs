use crate::{ConfigError, ConfigErrorResult, DEFAULT_PUBLIC_BASE_URL};

use serde::Deserialize;
use uuid::Uuid;

/// Where public profiles live; every issued public code points below this URL.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PublicProfileConfig {
    pub base_url: String,
}

impl Default for PublicProfileConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_PUBLIC_BASE_URL),
        }
    }
}

impl PublicProfileConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.base_url.trim();

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::public_profile(format!(
                "public_profile.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if url.contains(char::is_whitespace) {
            return Err(ConfigError::public_profile(
                "public_profile.base_url cannot contain whitespace",
            ));
        }

        // `<base_url>/<uuid>` must fit in a QR code
        if let Err(e) = ph_core::issue(Uuid::nil(), &self.base_url) {
            return Err(ConfigError::public_profile(format!(
                "public_profile.base_url ({} bytes) cannot be encoded as a public code: {}",
                self.base_url.len(),
                e
            )));
        }

        Ok(())
    }
}
