pub mod error;
pub mod identity_service;
pub mod image_store;
pub mod profile_service;
pub mod public_view;
