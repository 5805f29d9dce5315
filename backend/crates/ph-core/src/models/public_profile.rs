use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The slice of a user record anyone holding the id may read.
///
/// Contact and credential fields have no slot here, so they cannot leak
/// through this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicProfile {
    pub name: Option<String>,
    pub profile_image_path: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: Option<String>,
}
