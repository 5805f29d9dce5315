use ph_core::PublicProfile;

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfileDto {
    pub name: Option<String>,
    pub profile_image: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: Option<String>,
}

impl From<PublicProfile> for PublicProfileDto {
    fn from(p: PublicProfile) -> Self {
        Self {
            name: p.name,
            profile_image: p.profile_image_path,
            date_of_birth: p.date_of_birth,
            phone_number: p.phone_number,
        }
    }
}
