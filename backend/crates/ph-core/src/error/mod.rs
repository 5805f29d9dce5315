use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Public code encoding failed: {message} {location}")]
    Encoding {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid date of birth: {value} {location}")]
    InvalidDate {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
