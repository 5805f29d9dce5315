use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Owner-facing view of a user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: Option<String>,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub profile_image_path: Option<String>,
}
