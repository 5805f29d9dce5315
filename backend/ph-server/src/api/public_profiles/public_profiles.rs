use crate::{ApiResult, AppState, PublicProfileDto, PublicView, RecordId};

use axum::{Json, extract::State};

/// GET /api/public-profile/{id}
///
/// No authentication: possession of the id is enough
pub async fn get_public_profile(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> ApiResult<Json<PublicProfileDto>> {
    let view = PublicView::new(state.pool.clone());
    let profile = view.get_public_profile(id).await?;

    Ok(Json(profile.into()))
}
