use crate::{CoreError, FieldUpdate, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, NaiveDate};
use error_location::ErrorLocation;

/// Scalar profile fields a caller may change in one update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: FieldUpdate<String>,
    pub date_of_birth: FieldUpdate<NaiveDate>,
    pub phone_number: FieldUpdate<String>,
}

impl ProfileUpdate {
    /// Build an update from raw submitted values (`None` = field not sent).
    #[track_caller]
    pub fn from_submitted(
        name: Option<&str>,
        date_of_birth: Option<&str>,
        phone_number: Option<&str>,
    ) -> CoreErrorResult<Self> {
        Ok(Self {
            name: FieldUpdate::from_submitted(name),
            date_of_birth: FieldUpdate::from_submitted(date_of_birth)
                .try_map(|raw| parse_date_of_birth(&raw))?,
            phone_number: FieldUpdate::from_submitted(phone_number),
        })
    }

    /// True when every field is `Keep`
    pub fn is_noop(&self) -> bool {
        self.name.is_keep() && self.date_of_birth.is_keep() && self.phone_number.is_keep()
    }
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp (only the date is kept).
#[track_caller]
pub fn parse_date_of_birth(raw: &str) -> CoreErrorResult<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|_| CoreError::InvalidDate {
            value: raw.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}
