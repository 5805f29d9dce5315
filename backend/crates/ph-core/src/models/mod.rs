pub mod field_update;
pub mod lifecycle_phase;
pub mod profile;
pub mod profile_update;
pub mod public_profile;
pub mod user;
