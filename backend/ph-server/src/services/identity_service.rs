//! Account creation and authentication.

use crate::services::error::{Result as ServiceResult, ServiceError};

use ph_core::{ErrorLocation, User};
use ph_db::UserRepository;

use std::panic::Location;

use log::{info, warn};
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct IdentityService {
    users: UserRepository,
}

impl IdentityService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Create a local account. Duplicate emails are accepted.
    pub async fn register(
        &self,
        name: Option<String>,
        email: String,
        credential: String,
    ) -> ServiceResult<Uuid> {
        let user = User::new_local(name, email, credential);
        self.users.create(&user).await?;

        info!("Registered user {} ({})", user.id, user.phase());
        Ok(user.id)
    }

    /// Exact email + credential match; the oldest matching record wins.
    pub async fn login(&self, email: &str, credential: &str) -> ServiceResult<Uuid> {
        match self.users.find_by_credentials(email, credential).await? {
            Some(user) => {
                info!("User {} logged in", user.id);
                Ok(user.id)
            }
            None => {
                warn!("Rejected login for {}", email);
                Err(ServiceError::InvalidCredentials {
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }

    /// Find-or-create by email.
    ///
    /// An existing record is returned as-is: its `federated_id` is neither
    /// checked nor updated, so the first account under an email owns it.
    pub async fn login_or_create_federated(
        &self,
        name: Option<String>,
        email: String,
        federated_id: String,
    ) -> ServiceResult<Uuid> {
        if let Some(existing) = self.users.find_by_email(&email).await? {
            info!(
                "Federated login attached to existing user {} (federated: {})",
                existing.id,
                existing.is_federated()
            );
            return Ok(existing.id);
        }

        let user = User::new_federated(name, email, federated_id);
        self.users.create(&user).await?;

        info!("Created federated user {}", user.id);
        Ok(user.id)
    }
}
