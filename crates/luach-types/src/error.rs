use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum Gregorian year accepted by the calendar arithmetic.
pub const MIN_GREGORIAN_YEAR: i32 = 1;
/// Maximum Gregorian year accepted by the calendar arithmetic.
pub const MAX_GREGORIAN_YEAR: i32 = 9999;

/// Errors from luach operations.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum LuachError {
    /// Missing or malformed request field (latitude, longitude, date, ...).
    #[error("Invalid input for `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },

    /// The sun never reaches the requested angle on this date at this latitude.
    #[error("Sun does not reach {angle}° on {date} at latitude {latitude}")]
    DomainUndefined {
        angle: f64,
        date: NaiveDate,
        latitude: f64,
    },

    /// Date outside the supported calendar range.
    #[error("Date {date} is out of supported range ({min} to {max})")]
    DateOutOfRange {
        date: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },

    /// Timezone identifier not present in the tz database.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl LuachError {
    /// Creates an `InvalidInput` error.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }

    /// Creates a `DateOutOfRange` error with the standard bounds.
    pub fn date_out_of_range(date: NaiveDate) -> Self {
        Self::DateOutOfRange {
            date,
            min: NaiveDate::from_ymd_opt(MIN_GREGORIAN_YEAR, 1, 1).unwrap_or(NaiveDate::MIN),
            max: NaiveDate::from_ymd_opt(MAX_GREGORIAN_YEAR, 12, 31).unwrap_or(NaiveDate::MAX),
        }
    }

    /// True for errors the caller caused (bad request data or config).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::DateOutOfRange { .. } | Self::UnknownTimezone(_)
        )
    }
}
