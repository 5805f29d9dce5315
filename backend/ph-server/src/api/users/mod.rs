pub mod profile_dto;
pub mod profile_form;
pub mod updated_profile_dto;
#[allow(clippy::module_inception)]
pub mod users;
