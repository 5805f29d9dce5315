//! Explicit per-field intent for partial updates.

/// What a partial update wants done with one optional field.
///
/// Absence of a field in a request is `Keep`, never an implicit clear.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    /// Leave the stored value as it is
    #[default]
    Keep,
    /// Remove the stored value
    Clear,
    /// Replace the stored value
    Set(T),
}

impl<T> FieldUpdate<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }

    /// The value to write when this is not `Keep`. `Clear` writes `None`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Keep | Self::Clear => None,
        }
    }

    pub fn try_map<U, E, F>(self, f: F) -> Result<FieldUpdate<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        Ok(match self {
            Self::Keep => FieldUpdate::Keep,
            Self::Clear => FieldUpdate::Clear,
            Self::Set(value) => FieldUpdate::Set(f(value)?),
        })
    }
}

impl FieldUpdate<String> {
    /// Interpret a submitted form value: missing is `Keep`, blank is `Clear`.
    pub fn from_submitted(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None => Self::Keep,
            Some("") => Self::Clear,
            Some(value) => Self::Set(value.to_string()),
        }
    }
}
