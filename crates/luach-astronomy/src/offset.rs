//! Offsets, in milliseconds, of solar events from the day start or from midday.

use chrono::{Duration, NaiveDate};
use luach_types::LuachError;

use crate::solar::solar_position;
use crate::{cos_deg, sin_deg};

/// Offset of true solar midday from local midnight of `day`.
///
/// `(720 - averageMidday)` is mean noon in UTC minutes; the shift moves it
/// onto the local clock and the equation of time moves it to true noon.
/// The result is truncated to whole milliseconds.
pub fn midday_offset(day: NaiveDate, timezone_shift_hours: f64, longitude: f64) -> Duration {
    let sun = solar_position(day, longitude);
    let minutes = (720.0 - sun.average_midday) + timezone_shift_hours * 60.0 + sun.equation_of_time;
    Duration::milliseconds((minutes * 60_000.0).trunc() as i64)
}

/// Hour-angle arc between midday and the moment the sun stands at
/// `angle` degrees of elevation (negative below the horizon).
///
/// # Errors
/// `DomainUndefined` when the sun never reaches `angle` on that day at that
/// latitude (polar day or night for the requested depression).
pub fn offset_of_angle(
    angle: f64,
    day: NaiveDate,
    latitude: f64,
    longitude: f64,
) -> Result<Duration, LuachError> {
    let sun = solar_position(day, longitude);
    let cos_hour_angle = (sin_deg(angle) - sin_deg(latitude) * sin_deg(sun.declination))
        / (cos_deg(latitude) * cos_deg(sun.declination));
    let hour_angle = cos_hour_angle.acos().to_degrees();

    if !hour_angle.is_finite() {
        return Err(LuachError::DomainUndefined {
            angle,
            date: day,
            latitude,
        });
    }

    let ms = (hour_angle / 15.0 * 3_600_000.0).trunc();
    log::trace!("offset of {}° on {} at {}: {} ms", angle, day, latitude, ms);
    Ok(Duration::milliseconds(ms as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_jerusalem_midday_in_summer() {
        let offset = midday_offset(date(2025, 6, 21), 3.0, -35.2137);
        let minutes = offset.num_minutes();
        // True noon falls at about 12:41 on the Israeli summer clock.
        assert!((12 * 60 + 40..=12 * 60 + 42).contains(&minutes), "{}", minutes);
    }

    #[test]
    fn test_shift_moves_midday_by_whole_hours() {
        let base = midday_offset(date(2025, 1, 15), 2.0, -35.2137);
        let shifted = midday_offset(date(2025, 1, 15), 3.0, -35.2137);
        assert_eq!((shifted - base).num_milliseconds(), 3_600_000);
    }

    #[test]
    fn test_sunrise_offset_at_equator() {
        let offset = offset_of_angle(-0.8333, date(2025, 3, 20), 0.0, 0.5).unwrap();
        let minutes = offset.num_minutes();
        // Six hours plus the refraction allowance.
        assert!((360..366).contains(&minutes), "{}", minutes);
    }

    #[test]
    fn test_deeper_angles_are_further_from_midday() {
        let d = date(2025, 6, 21);
        let sunrise = offset_of_angle(-0.8333, d, 31.7683, -35.2137).unwrap();
        let dawn = offset_of_angle(-15.99, d, 31.7683, -35.2137).unwrap();
        assert!(dawn > sunrise);
    }

    #[test]
    fn test_polar_day_is_domain_error() {
        // Tromsø, midsummer: the sun never sets.
        let err = offset_of_angle(-0.8333, date(2025, 6, 21), 69.6492, -18.9553).unwrap_err();
        assert!(matches!(err, LuachError::DomainUndefined { .. }));
    }

    #[test]
    fn test_white_night_dawn_is_domain_error() {
        // At 55°N in June the sun stays above -19.75°.
        assert!(offset_of_angle(-19.75, date(2025, 6, 21), 55.0, -37.6).is_err());
        assert!(offset_of_angle(-0.8333, date(2025, 6, 21), 55.0, -37.6).is_ok());
    }
}
