//! Public code issuance.
//!
//! A public code is a QR code for `<base>/<id>`, rendered to PNG and wrapped
//! in a `data:` URI so clients can display it without a second fetch. It is a
//! pure function of `(id, base)` and may be re-derived at any time.

use crate::{CoreError, Result as CoreErrorResult};

use std::io::Cursor;
use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use error_location::ErrorLocation;
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use uuid::Uuid;

pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Smallest rendered edge in pixels; the renderer scales modules up to fit
const MIN_IMAGE_DIMENSION: u32 = 240;

/// An issued public code, held as a `data:image/png;base64,` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicCode(String);

impl PublicCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Raw PNG bytes behind the data URI
    #[track_caller]
    pub fn png_bytes(&self) -> CoreErrorResult<Vec<u8>> {
        let encoded = self
            .0
            .strip_prefix(DATA_URI_PREFIX)
            .ok_or_else(|| encoding_error("public code is not a PNG data URI"))?;

        STANDARD
            .decode(encoded)
            .map_err(|e| encoding_error(format!("invalid base64 payload: {e}")))
    }
}

impl From<String> for PublicCode {
    fn from(data_uri: String) -> Self {
        Self(data_uri)
    }
}

impl std::fmt::Display for PublicCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The URL a public code points at.
pub fn public_profile_url(public_base_url: &str, id: Uuid) -> String {
    format!("{}/{}", public_base_url.trim_end_matches('/'), id)
}

/// Derive the public code for a record.
#[track_caller]
pub fn issue(id: Uuid, public_base_url: &str) -> CoreErrorResult<PublicCode> {
    let payload = public_profile_url(public_base_url, id);

    let code = QrCode::new(payload.as_bytes())
        .map_err(|e| encoding_error(format!("cannot encode {payload}: {e}")))?;

    let pixels = code
        .render::<Luma<u8>>()
        .min_dimensions(MIN_IMAGE_DIMENSION, MIN_IMAGE_DIMENSION)
        .build();

    let mut png = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(pixels)
        .write_to(&mut png, ImageFormat::Png)
        .map_err(|e| encoding_error(format!("cannot write PNG: {e}")))?;

    Ok(PublicCode(format!(
        "{DATA_URI_PREFIX}{}",
        STANDARD.encode(png.into_inner())
    )))
}

#[track_caller]
fn encoding_error(message: impl Into<String>) -> CoreError {
    CoreError::Encoding {
        message: message.into(),
        location: ErrorLocation::from(Location::caller()),
    }
}
