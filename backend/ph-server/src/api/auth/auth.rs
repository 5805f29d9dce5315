//! Account REST API handlers

use crate::{
    ApiResult, AppState, AuthResponse, FederatedLoginRequest, IdentityService, LoginRequest,
    RegisterRequest,
};

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

/// POST /api/register
///
/// Create a local account; duplicate emails are accepted
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let Json(request) = payload?;

    let service = IdentityService::new(state.pool.clone());
    let user_id = service
        .register(request.name, request.email, request.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::new("User registered successfully", user_id)),
    ))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(request) = payload?;

    let service = IdentityService::new(state.pool.clone());
    let user_id = service.login(&request.email, &request.password).await?;

    Ok(Json(AuthResponse::new("Login successful", user_id)))
}

/// POST /api/google-login
///
/// Find-or-create by email for a provider-verified identity
pub async fn google_login(
    State(state): State<AppState>,
    payload: Result<Json<FederatedLoginRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(request) = payload?;

    let service = IdentityService::new(state.pool.clone());
    let user_id = service
        .login_or_create_federated(request.name, request.email, request.google_id)
        .await?;

    Ok(Json(AuthResponse::new("Google login successful", user_id)))
}
