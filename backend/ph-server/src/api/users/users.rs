//! Profile REST API handlers

use crate::{
    ApiResult, AppState, ProfileDto, ProfileForm, ProfileService, RecordId, UpdatedProfileDto,
};

use axum::{Json, extract::State};

fn profile_service(state: &AppState) -> ProfileService {
    ProfileService::new(
        state.pool.clone(),
        state.image_store.clone(),
        state.public_profile.base_url.clone(),
    )
}

/// GET /api/user/{id}
pub async fn get_user(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> ApiResult<Json<ProfileDto>> {
    let profile = profile_service(&state).get_profile(id).await?;

    Ok(Json(profile.into()))
}

/// PUT /api/user/{id}
///
/// Apply the submitted fields and image, then return the profile together
/// with a freshly issued public code. Accepts multipart or JSON.
pub async fn update_user(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    form: ProfileForm,
) -> ApiResult<Json<UpdatedProfileDto>> {
    let (update, image) = form.into_update()?;

    let published = profile_service(&state)
        .update_profile(id, update, image)
        .await?;

    Ok(Json(published.into()))
}
