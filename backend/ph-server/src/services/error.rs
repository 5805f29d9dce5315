//! Failure taxonomy shared by every service operation.

use ph_core::{CoreError, ErrorLocation};
use ph_db::DbError;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("User {id} not found {location}")]
    NotFound {
        id: String,
        location: ErrorLocation,
    },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Record store failure: {source} {location}")]
    Store {
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Image store failure: {message} {location}")]
    ImageStore {
        message: String,
        location: ErrorLocation,
    },

    #[error("Public code failure: {source} {location}")]
    Encoding {
        source: CoreError,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn image_store(message: impl Into<String>) -> Self {
        Self::ImageStore {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ServiceError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Encoding {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
