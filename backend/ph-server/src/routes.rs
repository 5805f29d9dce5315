use crate::{
    AppState, get_public_profile, get_user, google_login, health, login, panic_response, register,
    update_user,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let uploads_path = format!("/{}", state.image_store.url_prefix());
    let uploads = ServeDir::new(state.image_store.root());
    let body_limit = state.max_upload_bytes;

    Router::new()
        // Accounts
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/google-login", post(google_login))
        // Profiles
        .route("/api/user/{id}", get(get_user).put(update_user))
        .route("/api/public-profile/{id}", get(get_public_profile))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Stored profile images
        .nest_service(&uploads_path, uploads)
        .layer(DefaultBodyLimit::max(body_limit))
        // Add shared state
        .with_state(state)
        // Handler panics become 500 INTERNAL_ERROR
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
