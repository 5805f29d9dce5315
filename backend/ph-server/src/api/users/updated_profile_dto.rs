use crate::{ProfileDto, PublishedProfile};

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedProfileDto {
    #[serde(flatten)]
    pub profile: ProfileDto,
    /// `data:image/png;base64,...` QR code pointing at the public profile
    pub qr_code: String,
}

impl From<PublishedProfile> for UpdatedProfileDto {
    fn from(published: PublishedProfile) -> Self {
        Self {
            profile: published.profile.into(),
            qr_code: published.public_code.into_string(),
        }
    }
}
