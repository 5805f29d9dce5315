use ph_core::Profile;

use chrono::NaiveDate;
use serde::Serialize;

/// Owner's view of a profile for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub name: Option<String>,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: Option<String>,
    /// Image reference, served under the same path
    pub profile_image: Option<String>,
}

impl From<Profile> for ProfileDto {
    fn from(p: Profile) -> Self {
        Self {
            name: p.name,
            email: p.email,
            date_of_birth: p.date_of_birth,
            phone_number: p.phone_number,
            profile_image: p.profile_image_path,
        }
    }
}
