pub mod error;
pub mod models;
pub mod public_code;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::field_update::FieldUpdate;
pub use models::lifecycle_phase::LifecyclePhase;
pub use models::profile::Profile;
pub use models::profile_update::{ProfileUpdate, parse_date_of_birth};
pub use models::public_profile::PublicProfile;
pub use models::user::User;
pub use public_code::{PublicCode, issue, public_profile_url};
