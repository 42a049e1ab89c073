//! Low-precision solar position (J2000.0 mean elements).

use chrono::{Datelike, NaiveDate};

use crate::{cos_deg, sin_deg};

/// Obliquity of the ecliptic, held fixed.
pub const OBLIQUITY: f64 = 23.44;

/// `num_days_from_ce` of 2000-01-01.
const J2000_DAYS_FROM_CE: i32 = 730_120;
const DAY_MS: f64 = 86_400_000.0;

/// Solar coordinates for one day, all angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Equation of time in minutes, added to mean noon to get true noon.
    pub equation_of_time: f64,
    pub mean_anomaly: f64,
    pub mean_longitude: f64,
    pub right_ascension: f64,
    pub declination: f64,
    pub obliquity: f64,
    pub ecliptic_longitude: f64,
    /// Minutes by which mean local noon precedes 12:00 UTC.
    pub average_midday: f64,
}

/// Computes the sun's position at mean local noon of `day`.
///
/// `longitude` is west-positive (callers pass it pre-negated).
pub fn solar_position(day: NaiveDate, longitude: f64) -> SolarPosition {
    let average_midday = -longitude * 4.0;

    let day_start = f64::from(day.num_days_from_ce() - J2000_DAYS_FROM_CE) * DAY_MS;
    let instant_days = (day_start + average_midday * 60_000.0) / DAY_MS;
    let days_since = instant_days.trunc() + (average_midday / 1440.0).rem_euclid(1.0);

    let mean_longitude = (280.461 + 0.9856474 * days_since) % 360.0;
    let mean_anomaly = (357.528 + 0.9856003 * days_since) % 360.0;
    let ecliptic_longitude = (mean_longitude
        + 1.915 * sin_deg(mean_anomaly)
        + 0.02 * sin_deg(2.0 * mean_anomaly))
        % 360.0;

    let right_ascension = normalize_right_ascension(
        (ecliptic_longitude.to_radians().tan() * cos_deg(OBLIQUITY))
            .atan()
            .to_degrees(),
    );
    let equation_of_time = normalize_equation_of_time((right_ascension - mean_longitude) * 4.0);
    let declination = (sin_deg(ecliptic_longitude) * sin_deg(OBLIQUITY))
        .asin()
        .to_degrees();

    SolarPosition {
        equation_of_time,
        mean_anomaly,
        mean_longitude,
        right_ascension,
        declination,
        obliquity: OBLIQUITY,
        ecliptic_longitude,
        average_midday,
    }
}

/// Folds `atan` output into [0, 180): lift negatives by whole half-turns,
/// then reduce positives.
pub(crate) fn normalize_right_ascension(mut alpha: f64) -> f64 {
    while alpha < 0.0 {
        alpha += 180.0;
    }
    if alpha > 0.0 {
        alpha %= 180.0;
    }
    alpha
}

/// Reduces raw minutes modulo 60 (sign of the dividend kept), then lifts
/// anything below -20 by whole hours. Values in [40, 60) are left alone.
pub(crate) fn normalize_equation_of_time(raw_minutes: f64) -> f64 {
    let mut e = raw_minutes % 60.0;
    while e < -20.0 {
        e += 60.0;
    }
    e
}
