pub mod public_profile_dto;
#[allow(clippy::module_inception)]
pub mod public_profiles;
