pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{google_login, login, register},
        auth_response::AuthResponse,
        federated_login_request::FederatedLoginRequest,
        login_request::LoginRequest,
        register_request::RegisterRequest,
    },
    error::Result as ApiResult,
    error::{ApiError, panic_response},
    extractors::record_id::RecordId,
    public_profiles::{
        public_profile_dto::PublicProfileDto, public_profiles::get_public_profile,
    },
    users::{
        profile_dto::ProfileDto,
        profile_form::ProfileForm,
        updated_profile_dto::UpdatedProfileDto,
        users::{get_user, update_user},
    },
};
pub use app_state::AppState;
pub use services::{
    error::{Result as ServiceResult, ServiceError},
    identity_service::IdentityService,
    image_store::{ImageStore, ImageUpload},
    profile_service::{ProfileService, PublishedProfile},
    public_view::PublicView,
};

pub use crate::routes::build_router;
