pub mod auth;
pub mod error;
pub mod extractors;
pub mod public_profiles;
pub mod users;
