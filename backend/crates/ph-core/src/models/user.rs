//! User record - the only persisted entity.

use crate::{LifecyclePhase, Profile, PublicProfile};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: Option<String>,
    /// Not unique: several records may share an email
    pub email: String,
    /// Compared by equality on local login; `None` for federated accounts
    pub credential: Option<String>,
    pub federated_id: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub profile_image_path: Option<String>,
    /// Data URI of the QR code pointing at this record's public profile
    pub public_code: Option<String>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a record for local (email + credential) login
    pub fn new_local(name: Option<String>, email: String, credential: String) -> Self {
        Self::new(name, email, Some(credential), None)
    }

    /// Create a record for a first-time federated login
    pub fn new_federated(name: Option<String>, email: String, federated_id: String) -> Self {
        Self::new(name, email, None, Some(federated_id))
    }

    fn new(
        name: Option<String>,
        email: String,
        credential: Option<String>,
        federated_id: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            credential,
            federated_id,
            date_of_birth: None,
            phone_number: None,
            profile_image_path: None,
            public_code: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        if self.public_code.is_some() {
            LifecyclePhase::Published
        } else {
            LifecyclePhase::Provisional
        }
    }

    pub fn is_federated(&self) -> bool {
        self.federated_id.is_some()
    }

    pub fn profile(&self) -> Profile {
        Profile {
            name: self.name.clone(),
            email: self.email.clone(),
            date_of_birth: self.date_of_birth,
            phone_number: self.phone_number.clone(),
            profile_image_path: self.profile_image_path.clone(),
        }
    }

    pub fn public_profile(&self) -> PublicProfile {
        PublicProfile {
            name: self.name.clone(),
            profile_image_path: self.profile_image_path.clone(),
            date_of_birth: self.date_of_birth,
            phone_number: self.phone_number.clone(),
        }
    }
}
