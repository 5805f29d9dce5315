//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message", "field"?}}`
//! with a status code chosen per variant.

use crate::services::error::ServiceError;

use ph_core::CoreError;

use std::any::Any;
use std::panic::Location;

use axum::{
    Json,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Form field name when a single submitted value was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// No record for the id (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Email/credential pair matched nothing (401)
    #[error("Invalid credentials: {message} {location}")]
    InvalidCredentials {
        message: String,
        location: ErrorLocation,
    },

    /// Record store unavailable or failed (503)
    #[error("Store error: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },

    /// Image blob could not be written (507)
    #[error("Image store error: {message} {location}")]
    ImageStore {
        message: String,
        location: ErrorLocation,
    },

    /// Public code could not be rendered (500)
    #[error("Encoding error: {message} {location}")]
    Encoding {
        message: String,
        location: ErrorLocation,
    },

    /// A submitted value could not be parsed (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Malformed body (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Body exceeded the upload limit (413)
    #[error("Payload too large: {message} {location}")]
    PayloadTooLarge {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidCredentials { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Store { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::ImageStore { .. } => StatusCode::INSUFFICIENT_STORAGE,
            ApiError::Encoding { .. } | ApiError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            ApiError::Store { .. } => "STORE_ERROR",
            ApiError::ImageStore { .. } => "IMAGE_STORE_ERROR",
            ApiError::Encoding { .. } => "ENCODING_ERROR",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::PayloadTooLarge { .. } => "PAYLOAD_TOO_LARGE",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let status = self.status();
        let code = self.code().to_string();

        let (message, field) = match self {
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::NotFound { message, .. }
            | ApiError::InvalidCredentials { message, .. }
            | ApiError::Store { message, .. }
            | ApiError::ImageStore { message, .. }
            | ApiError::Encoding { message, .. }
            | ApiError::BadRequest { message, .. }
            | ApiError::PayloadTooLarge { message, .. }
            | ApiError::Internal { message, .. } => (message, None),
        };

        let body = ApiErrorBody {
            code,
            message,
            field,
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert service failures to API errors
impl From<ServiceError> for ApiError {
    #[track_caller]
    fn from(e: ServiceError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            ServiceError::NotFound { id, .. } => ApiError::NotFound {
                message: format!("User {} not found", id),
                location,
            },
            ServiceError::InvalidCredentials { .. } => ApiError::InvalidCredentials {
                message: "Invalid email or password".to_string(),
                location,
            },
            ServiceError::Store { source, .. } => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", source);
                ApiError::Store {
                    message: "Record store unavailable".to_string(),
                    location,
                }
            }
            ServiceError::ImageStore { message, .. } => {
                log::error!("Image store error: {}", message);
                ApiError::ImageStore {
                    message: "Failed to store profile image".to_string(),
                    location,
                }
            }
            ServiceError::Encoding { source, .. } => ApiError::from(source),
        }
    }
}

/// Convert core errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            CoreError::InvalidDate { value, .. } => ApiError::Validation {
                message: format!(
                    "Invalid date of birth '{}', expected YYYY-MM-DD or RFC 3339",
                    value
                ),
                field: Some("dateOfBirth".to_string()),
                location,
            },
            CoreError::Encoding { message, .. } => {
                log::error!("Public code encoding failed: {}", message);
                ApiError::Encoding {
                    message: "Failed to generate public code".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: e.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<MultipartRejection> for ApiError {
    #[track_caller]
    fn from(e: MultipartRejection) -> Self {
        ApiError::BadRequest {
            message: e.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<MultipartError> for ApiError {
    #[track_caller]
    fn from(e: MultipartError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge {
                message: e.body_text(),
                location,
            }
        } else {
            ApiError::BadRequest {
                message: e.body_text(),
                location,
            }
        }
    }
}

/// Response for a handler that panicked; used with `CatchPanicLayer`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    log::error!("Handler panicked: {}", detail);

    ApiError::Internal {
        message: "Internal server error".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into_response()
}

pub type Result<T> = std::result::Result<T, ApiError>;
