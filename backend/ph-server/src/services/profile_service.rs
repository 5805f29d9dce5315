//! Profile reads and the update-then-publish workflow.

use crate::services::error::{Result as ServiceResult, ServiceError};
use crate::services::image_store::{ImageStore, ImageUpload};

use ph_core::{Profile, ProfileUpdate, PublicCode, public_code};
use ph_db::UserRepository;

use chrono::Utc;
use log::{debug, info, warn};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Result of a successful update: the owner's view plus the fresh code.
#[derive(Debug, Clone)]
pub struct PublishedProfile {
    pub profile: Profile,
    pub public_code: PublicCode,
}

pub struct ProfileService {
    users: UserRepository,
    images: ImageStore,
    public_base_url: String,
}

impl ProfileService {
    pub fn new(pool: SqlitePool, images: ImageStore, public_base_url: impl Into<String>) -> Self {
        Self {
            users: UserRepository::new(pool),
            images,
            public_base_url: public_base_url.into(),
        }
    }

    pub async fn get_profile(&self, id: Uuid) -> ServiceResult<Profile> {
        self.users
            .find_by_id(id)
            .await?
            .map(|user| user.profile())
            .ok_or_else(|| ServiceError::not_found(id))
    }

    /// Apply `update`, attach `image` if given, then (re)issue the public code.
    ///
    /// The field write and the code write are separate: if the second one
    /// fails the record keeps its new fields with a stale or missing code.
    pub async fn update_profile(
        &self,
        id: Uuid,
        update: ProfileUpdate,
        image: Option<ImageUpload>,
    ) -> ServiceResult<PublishedProfile> {
        if update.is_noop() && image.is_none() {
            debug!("Update for {} changes no fields; re-issuing public code", id);
        }

        let image_ref = match &image {
            Some(upload) => Some(self.images.save(upload).await?),
            None => None,
        };

        let updated = match self
            .users
            .update_profile(id, &update, image_ref.as_deref(), Utc::now())
            .await
        {
            Ok(Some(user)) => user,
            Ok(None) => {
                self.discard_orphan(image_ref.as_deref()).await;
                return Err(ServiceError::not_found(id));
            }
            Err(e) => {
                self.discard_orphan(image_ref.as_deref()).await;
                return Err(e.into());
            }
        };

        let previous_phase = updated.phase();
        let code = public_code::issue(updated.id, &self.public_base_url)?;

        if !self.users.set_public_code(updated.id, code.as_str()).await? {
            return Err(ServiceError::not_found(id));
        }

        info!(
            "Issued public code for user {} ({} -> published)",
            id, previous_phase
        );

        Ok(PublishedProfile {
            profile: updated.profile(),
            public_code: code,
        })
    }

    async fn discard_orphan(&self, image_ref: Option<&str>) {
        if let Some(reference) = image_ref
            && let Err(e) = self.images.remove(reference).await
        {
            warn!("Failed to remove orphaned image {}: {}", reference, e);
        }
    }
}
