use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LuachError;

/// Observer location.
///
/// `lng` uses the engine's west-positive convention: callers pass the
/// longitude already negated (Jerusalem is `-35.2137`). The solar model
/// relies on this sign and does not flip it again.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lng: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate without validation.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a validated coordinate.
    ///
    /// # Errors
    /// `InvalidInput` if a component is non-finite, exactly zero (the request
    /// contract treats zero as "missing"), or outside its range.
    pub fn try_new(lat: f64, lng: f64) -> Result<Self, LuachError> {
        check_component("latitude", lat, 90.0)?;
        check_component("longitude", lng, 180.0)?;
        Ok(Self { lat, lng })
    }

    /// Jerusalem, with the longitude pre-negated.
    pub const fn jerusalem() -> Self {
        Self::new(31.7683, -35.2137)
    }
}

fn check_component(field: &str, value: f64, limit: f64) -> Result<(), LuachError> {
    if !value.is_finite() {
        return Err(LuachError::invalid_input(field, "must be a finite number"));
    }
    if value == 0.0 {
        return Err(LuachError::invalid_input(field, "must be non-zero"));
    }
    if value.abs() > limit {
        return Err(LuachError::invalid_input(
            field,
            format!("{} is outside [-{}, {}]", value, limit, limit),
        ));
    }
    Ok(())
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}°, {:.4}°", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_latitude_rejected() {
        let err = GeoCoordinate::try_new(0.0, -35.2).unwrap_err();
        assert!(matches!(err, LuachError::InvalidInput { ref field, .. } if field == "latitude"));
    }

    #[test]
    fn test_out_of_range_longitude_rejected() {
        assert!(GeoCoordinate::try_new(31.7, 200.0).is_err());
        assert!(GeoCoordinate::try_new(f64::NAN, 35.0).is_err());
    }

    #[test]
    fn test_valid_coordinate() {
        let c = GeoCoordinate::try_new(31.7683, -35.2137).unwrap();
        assert_eq!(c, GeoCoordinate::jerusalem());
    }
}
