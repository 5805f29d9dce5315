use crate::services::error::{Result as ServiceResult, ServiceError};

use ph_core::PublicProfile;
use ph_db::UserRepository;

use sqlx::SqlitePool;
use uuid::Uuid;

/// Unauthenticated read of a record; holding the id is the only gate.
pub struct PublicView {
    users: UserRepository,
}

impl PublicView {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    pub async fn get_public_profile(&self, id: Uuid) -> ServiceResult<PublicProfile> {
        self.users
            .find_by_id(id)
            .await?
            .map(|user| user.public_profile())
            .ok_or_else(|| ServiceError::not_found(id))
    }
}
