#[allow(clippy::module_inception)]
pub mod auth;
pub mod auth_response;
pub mod federated_login_request;
pub mod login_request;
pub mod register_request;
