//! Body of `PUT /api/user/{id}`: multipart form, or JSON for scalar-only updates

use crate::{ApiError, ApiResult, ImageUpload};

use ph_core::ProfileUpdate;

use std::future::Future;

use axum::{
    Json,
    extract::{FromRequest, Multipart, Request},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use serde::Deserialize;

const NAME_FIELD: &str = "name";
const DATE_OF_BIRTH_FIELD: &str = "dateOfBirth";
const PHONE_NUMBER_FIELD: &str = "phoneNumber";
const PROFILE_IMAGE_FIELD: &str = "profileImage";

/// Raw submitted parts. `None` means the part was not sent at all.
#[derive(Debug, Default)]
pub struct ProfileForm {
    pub name: Option<String>,
    pub date_of_birth: Option<String>,
    pub phone_number: Option<String>,
    pub profile_image: Option<ImageUpload>,
}

/// JSON variant; an absent or `null` key leaves the field as it is.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileJson {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    date_of_birth: Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
}

impl From<ProfileJson> for ProfileForm {
    fn from(body: ProfileJson) -> Self {
        Self {
            name: body.name,
            date_of_birth: body.date_of_birth,
            phone_number: body.phone_number,
            profile_image: None,
        }
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

impl<S> FromRequest<S> for ProfileForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            if is_json(req.headers()) {
                let Json(body) = Json::<ProfileJson>::from_request(req, state).await?;
                return Ok(body.into());
            }

            let multipart = Multipart::from_request(req, state).await?;
            Self::read(multipart).await
        }
    }
}

impl ProfileForm {
    pub async fn read(mut multipart: Multipart) -> ApiResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(field_name) = field.name().map(str::to_owned) else {
                continue;
            };

            match field_name.as_str() {
                NAME_FIELD => form.name = Some(field.text().await?),
                DATE_OF_BIRTH_FIELD => form.date_of_birth = Some(field.text().await?),
                PHONE_NUMBER_FIELD => form.phone_number = Some(field.text().await?),
                PROFILE_IMAGE_FIELD => {
                    if field.file_name().is_none() {
                        log::debug!("Ignoring {} part without a file name", PROFILE_IMAGE_FIELD);
                        continue;
                    }

                    let original_name = field.file_name().map(str::to_owned);
                    let bytes = field.bytes().await?;

                    // An empty file input still submits a part
                    if bytes.is_empty() {
                        continue;
                    }

                    form.profile_image = Some(ImageUpload {
                        original_name,
                        bytes,
                    });
                }
                other => log::debug!("Ignoring unknown multipart field '{}'", other),
            }
        }

        Ok(form)
    }

    /// Split into the scalar update and the optional image.
    ///
    /// Fails on an unparseable date before anything is written.
    pub fn into_update(self) -> ApiResult<(ProfileUpdate, Option<ImageUpload>)> {
        let update = ProfileUpdate::from_submitted(
            self.name.as_deref(),
            self.date_of_birth.as_deref(),
            self.phone_number.as_deref(),
        )?;

        Ok((update, self.profile_image))
    }
}
