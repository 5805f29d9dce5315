use crate::services::image_store::ImageStore;

use ph_config::PublicProfileConfig;

use sqlx::SqlitePool;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub image_store: ImageStore,
    pub public_profile: PublicProfileConfig,
    /// Request body ceiling for profile updates
    pub max_upload_bytes: usize,
}
