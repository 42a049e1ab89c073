//! Incoming request validation.

use chrono::{DateTime, NaiveDate};
use luach_types::{GeoCoordinate, LuachError};
use serde::{Deserialize, Serialize};

/// A request as received; nothing is trusted yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZmanimRequest {
    #[serde(alias = "lat")]
    pub latitude: Option<f64>,
    /// West-positive, as everywhere in the engine.
    #[serde(alias = "lng")]
    pub longitude: Option<f64>,
    /// ISO-8601 date; today in the board's timezone when absent.
    pub date: Option<String>,
}

impl ZmanimRequest {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            date: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date.format("%Y-%m-%d").to_string());
        self
    }

    /// Validates against an explicit "today".
    ///
    /// # Errors
    /// `InvalidInput` for a missing, zero or out-of-range coordinate, or an
    /// unparseable date. Coordinates are never defaulted.
    pub fn validate_at(&self, today: NaiveDate) -> Result<(GeoCoordinate, NaiveDate), LuachError> {
        let latitude = self
            .latitude
            .ok_or_else(|| LuachError::invalid_input("latitude", "is required"))?;
        let longitude = self
            .longitude
            .ok_or_else(|| LuachError::invalid_input("longitude", "is required"))?;
        let location = GeoCoordinate::try_new(latitude, longitude)?;

        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(s) => parse_date(s)?,
        };
        Ok((location, date))
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, LuachError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()))
        .map_err(|_| LuachError::invalid_input("date", format!("`{}` is not an ISO-8601 date", s)))
}
