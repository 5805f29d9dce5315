pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;

/// Embedded schema migrations for the user store
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
