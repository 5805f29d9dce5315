//! Disk-backed storage for uploaded profile images.
//!
//! Blobs live in one flat directory. The stored reference is
//! `<url_prefix>/<file_name>`, which is also the path they are served under.

use crate::services::error::{Result as ServiceResult, ServiceError};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

const MAX_EXTENSION_LEN: usize = 5;

/// An image received with a profile update
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Client-side file name, used only for its extension
    pub original_name: Option<String>,
    pub bytes: Bytes,
}

#[derive(Debug, Clone)]
pub struct ImageStore {
    root: Arc<PathBuf>,
    url_prefix: Arc<str>,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>, url_prefix: &str) -> Self {
        Self {
            root: Arc::new(root.into()),
            url_prefix: Arc::from(url_prefix.trim_matches('/')),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    pub async fn ensure_root(&self) -> ServiceResult<()> {
        tokio::fs::create_dir_all(self.root.as_path())
            .await
            .map_err(|e| {
                ServiceError::image_store(format!(
                    "cannot create {}: {}",
                    self.root.display(),
                    e
                ))
            })
    }

    /// True when the blob directory exists and is a directory
    pub async fn is_available(&self) -> bool {
        tokio::fs::metadata(self.root.as_path())
            .await
            .is_ok_and(|meta| meta.is_dir())
    }

    /// Write a blob under a fresh name and return its reference.
    pub async fn save(&self, upload: &ImageUpload) -> ServiceResult<String> {
        let file_name = Self::unique_file_name(upload.original_name.as_deref());
        let path = self.root.join(&file_name);

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                ServiceError::image_store(format!("cannot create {}: {}", path.display(), e))
            })?;

        file.write_all(&upload.bytes).await.map_err(|e| {
            ServiceError::image_store(format!("cannot write {}: {}", path.display(), e))
        })?;
        file.flush().await.map_err(|e| {
            ServiceError::image_store(format!("cannot flush {}: {}", path.display(), e))
        })?;

        log::debug!("Stored image {} ({} bytes)", file_name, upload.bytes.len());
        Ok(format!("{}/{}", self.url_prefix, file_name))
    }

    /// Delete a blob previously returned by `save`.
    pub async fn remove(&self, reference: &str) -> ServiceResult<()> {
        let file_name = reference
            .strip_prefix(&*self.url_prefix)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|name| !name.is_empty() && !name.contains(['/', '\\']) && *name != "..")
            .ok_or_else(|| {
                ServiceError::image_store(format!("not an image reference: {reference}"))
            })?;

        let path = self.root.join(file_name);
        tokio::fs::remove_file(&path).await.map_err(|e| {
            ServiceError::image_store(format!("cannot remove {}: {}", path.display(), e))
        })
    }

    /// `<unix-millis>-<8 hex chars>[.ext]`
    pub fn unique_file_name(original_name: Option<&str>) -> String {
        let suffix = Uuid::new_v4().simple().to_string();
        let extension = original_name
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .filter(|ext| {
                !ext.is_empty()
                    && ext.len() <= MAX_EXTENSION_LEN
                    && ext.chars().all(|c| c.is_ascii_alphanumeric())
            })
            .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
            .unwrap_or_default();

        format!(
            "{}-{}{}",
            Utc::now().timestamp_millis(),
            &suffix[..8],
            extension
        )
    }
}
