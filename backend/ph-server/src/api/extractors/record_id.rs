//! Path extractor for record ids

use crate::ApiError;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use error_location::ErrorLocation;
use uuid::Uuid;

/// The `{id}` path segment parsed as a UUID.
///
/// A segment that is not a UUID can never name a record, so it is
/// rejected as `NotFound` rather than as a malformed request.
pub struct RecordId(pub Uuid);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Path(raw) = Path::<String>::from_request_parts(parts, state)
                .await
                .map_err(|e| ApiError::NotFound {
                    message: format!("No record id in path: {}", e.body_text()),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            match Uuid::parse_str(&raw) {
                Ok(id) => Ok(RecordId(id)),
                Err(_) => {
                    log::debug!("Path id is not a UUID: {}", raw);
                    Err(ApiError::NotFound {
                        message: format!("User {} not found", raw),
                        location: ErrorLocation::from(Location::caller()),
                    })
                }
            }
        }
    }
}
