//! Single-day zmanim derivation.
//!
//! Every instant is built from one midday value plus or minus an hour-angle
//! offset. Sunset is the mirror of sunrise around midday, so the day is
//! symmetric by construction.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use luach_types::{GeoCoordinate, LuachError, ZmanKey, ZmanimSet};

use crate::offset::{midday_offset, offset_of_angle};

/// Sun 19.75° below the horizon.
pub const DAWN_90_ANGLE: f64 = -19.75;
/// Sun 15.99° below the horizon; also used for the late nightfall.
pub const DAWN_72_ANGLE: f64 = -15.99;
pub const TALLIT_TEFILLIN_ANGLE: f64 = -11.5;
/// Upper limb on the horizon, refraction included.
pub const SUNRISE_ANGLE: f64 = -0.8333;
pub const NIGHTFALL_ANGLE: f64 = -4.65;

/// How long a proportional hour is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourSystem {
    /// Sunrise to sunset, in twelve parts.
    Gra,
    /// Dawn (72) to late nightfall, in twelve parts.
    MagenAvraham,
}

/// Proportional-hour markers: key, hour system, hours after the start of the day.
pub const PROPORTIONAL_HOURS: [(ZmanKey, HourSystem, f64); 16] = [
    (ZmanKey::SofZmanShmaMga, HourSystem::MagenAvraham, 3.0),
    (ZmanKey::SofZmanShmaGra, HourSystem::Gra, 3.0),
    (ZmanKey::SofZmanTefilaMga, HourSystem::MagenAvraham, 4.0),
    (ZmanKey::SofZmanTefilaGra, HourSystem::Gra, 4.0),
    (ZmanKey::SofZmanBiurChametzMga, HourSystem::MagenAvraham, 5.0),
    (ZmanKey::SofZmanBiurChametzGra, HourSystem::Gra, 5.0),
    (ZmanKey::MinchaGedolaGra, HourSystem::Gra, 6.5),
    (ZmanKey::MinchaGedolaMga, HourSystem::MagenAvraham, 6.5),
    (ZmanKey::SevenHoursGra, HourSystem::Gra, 7.0),
    (ZmanKey::SevenHoursMga, HourSystem::MagenAvraham, 7.0),
    (ZmanKey::NineHoursGra, HourSystem::Gra, 9.0),
    (ZmanKey::NineHoursMga, HourSystem::MagenAvraham, 9.0),
    (ZmanKey::MinchaKetanaGra, HourSystem::Gra, 9.5),
    (ZmanKey::MinchaKetanaMga, HourSystem::MagenAvraham, 9.5),
    (ZmanKey::PlagHaminchaGra, HourSystem::Gra, 10.75),
    (ZmanKey::PlagHaminchaMga, HourSystem::MagenAvraham, 10.75),
];

/// Local midnight of `day` in a fixed UTC shift.
pub fn local_midnight(
    day: NaiveDate,
    timezone_shift_hours: f64,
) -> Result<DateTime<FixedOffset>, LuachError> {
    let seconds = (timezone_shift_hours * 3600.0).round();
    let offset = FixedOffset::east_opt(seconds as i32)
        .filter(|_| seconds.is_finite())
        .ok_or_else(|| {
            LuachError::invalid_input("timezoneShift", format!("{} hours", timezone_shift_hours))
        })?;
    offset
        .from_local_datetime(&day.and_time(NaiveTime::MIN))
        .single()
        .ok_or_else(|| LuachError::invalid_input("date", day.to_string()))
}

/// The three anchors every other zman hangs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarDay {
    pub day_start: DateTime<FixedOffset>,
    pub chatzot: DateTime<FixedOffset>,
    pub sunrise: DateTime<FixedOffset>,
    pub sunset: DateTime<FixedOffset>,
}

impl SolarDay {
    /// Length of one GRA hour, truncated to whole milliseconds.
    pub fn gra_hour(&self) -> Duration {
        Duration::milliseconds((self.chatzot - self.sunrise).num_milliseconds() / 6)
    }
}

/// Midday, sunrise and sunset only.
pub fn solar_day(
    day: NaiveDate,
    timezone_shift_hours: f64,
    location: &GeoCoordinate,
) -> Result<SolarDay, LuachError> {
    let day_start = local_midnight(day, timezone_shift_hours)?;
    let chatzot = day_start + midday_offset(day, timezone_shift_hours, location.lng);
    let half_day = offset_of_angle(SUNRISE_ANGLE, day, location.lat, location.lng)
        .inspect_err(|e| log::warn!("no sunrise for {} at {}: {}", day, location, e))?;
    let sunrise = chatzot - half_day;

    Ok(SolarDay {
        day_start,
        chatzot,
        sunrise,
        sunset: chatzot + (chatzot - sunrise),
    })
}

/// Derives the full single-day set (no Shabbat keys).
///
/// The result is all-or-nothing: if the sun never reaches any of the
/// required angles the whole day fails with `DomainUndefined`.
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use luach_astronomy::derive_zmanim;
/// use luach_types::{GeoCoordinate, ZmanKey};
///
/// let day = NaiveDate::from_ymd_opt(2025, 6, 21).unwrap();
/// let set = derive_zmanim(day, 3.0, &GeoCoordinate::jerusalem()).unwrap();
/// assert!(set.get(ZmanKey::Sunrise) < set.get(ZmanKey::Sunset));
/// ```
pub fn derive_zmanim(
    day: NaiveDate,
    timezone_shift_hours: f64,
    location: &GeoCoordinate,
) -> Result<ZmanimSet, LuachError> {
    let solar = solar_day(day, timezone_shift_hours, location)?;
    let chatzot = solar.chatzot;

    let offset = |angle: f64| {
        offset_of_angle(angle, day, location.lat, location.lng)
            .inspect_err(|e| log::warn!("zmanim for {} at {}: {}", day, location, e))
    };
    let dawn90 = chatzot - offset(DAWN_90_ANGLE)?;
    let dawn72_offset = offset(DAWN_72_ANGLE)?;
    let dawn72 = chatzot - dawn72_offset;
    let tallit_tefillin = chatzot - offset(TALLIT_TEFILLIN_ANGLE)?;
    let nightfall = chatzot + offset(NIGHTFALL_ANGLE)?;
    let nightfall90 = chatzot + dawn72_offset;

    let gra_hour = solar.gra_hour().num_milliseconds();
    let mga_hour = (chatzot - dawn72).num_milliseconds() / 6;

    let mut times = vec![
        (ZmanKey::Dawn90, dawn90),
        (ZmanKey::Dawn72, dawn72),
        (ZmanKey::TallitTefillin, tallit_tefillin),
        (ZmanKey::Sunrise, solar.sunrise),
        (ZmanKey::Chatzot, chatzot),
        (ZmanKey::Sunset, solar.sunset),
        (ZmanKey::Nightfall, nightfall),
        (ZmanKey::Nightfall90, nightfall90),
    ];

    for (key, system, hours) in PROPORTIONAL_HOURS {
        let (start, hour) = match system {
            HourSystem::Gra => (solar.sunrise, gra_hour),
            HourSystem::MagenAvraham => (dawn72, mga_hour),
        };
        let ms = (hour as f64 * hours).trunc() as i64;
        times.push((key, start + Duration::milliseconds(ms)));
    }

    Ok(times.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn minutes_of_day(t: DateTime<FixedOffset>) -> u32 {
        t.hour() * 60 + t.minute()
    }

    #[test]
    fn test_jerusalem_summer_solstice() {
        let set = derive_zmanim(date(2025, 6, 21), 3.0, &GeoCoordinate::jerusalem()).unwrap();
        let sunrise = set.get(ZmanKey::Sunrise).unwrap();
        let sunset = set.get(ZmanKey::Sunset).unwrap();
        let chatzot = set.get(ZmanKey::Chatzot).unwrap();

        assert!(minutes_of_day(sunrise) < 6 * 60);
        assert!(minutes_of_day(sunset) > 18 * 60 + 30);
        // On standard time (UTC+2) midday sits within half an hour of 12:00.
        let standard = minutes_of_day(chatzot) as i64 - 60;
        assert!((standard - 720).abs() <= 30, "{}", standard);
        assert_eq!(sunrise.offset().local_minus_utc(), 3 * 3600);
    }

    #[test]
    fn test_jerusalem_known_values() {
        let set = derive_zmanim(date(2025, 6, 21), 3.0, &GeoCoordinate::jerusalem()).unwrap();
        let hm = |k| {
            let t = set.get(k).unwrap();
            (t.hour(), t.minute())
        };
        assert_eq!(hm(ZmanKey::Sunrise), (5, 34));
        assert_eq!(hm(ZmanKey::Chatzot), (12, 41));
        assert_eq!(hm(ZmanKey::Sunset), (19, 47));
        assert_eq!(hm(ZmanKey::Dawn72), (4, 7));
    }

    #[test]
    fn test_sunset_mirrors_sunrise() {
        for (y, m, d) in [(2025, 1, 1), (2025, 3, 20), (2025, 9, 1), (2024, 12, 21)] {
            let day = solar_day(date(y, m, d), 2.0, &GeoCoordinate::jerusalem()).unwrap();
            assert_eq!(day.sunset - day.chatzot, day.chatzot - day.sunrise);
        }
    }

    #[test]
    fn test_strict_order() {
        let set = derive_zmanim(date(2024, 12, 21), 2.0, &GeoCoordinate::jerusalem()).unwrap();
        let order = [
            ZmanKey::Dawn90,
            ZmanKey::Dawn72,
            ZmanKey::TallitTefillin,
            ZmanKey::Sunrise,
            ZmanKey::SofZmanShmaGra,
            ZmanKey::Chatzot,
            ZmanKey::MinchaGedolaGra,
            ZmanKey::PlagHaminchaGra,
            ZmanKey::Sunset,
            ZmanKey::Nightfall,
            ZmanKey::Nightfall90,
        ];
        for pair in order.windows(2) {
            assert!(set.get(pair[0]).unwrap() < set.get(pair[1]).unwrap(), "{:?}", pair);
        }
    }

    #[test]
    fn test_proportional_hours() {
        let day = date(2025, 3, 20);
        let loc = GeoCoordinate::jerusalem();
        let set = derive_zmanim(day, 2.0, &loc).unwrap();
        let solar = solar_day(day, 2.0, &loc).unwrap();
        let hour = solar.gra_hour().num_milliseconds();

        let shma = set.get(ZmanKey::SofZmanShmaGra).unwrap();
        assert_eq!((shma - solar.sunrise).num_milliseconds(), hour * 3);

        // Magen Avraham ends Shema earlier than the GRA.
        assert!(set.get(ZmanKey::SofZmanShmaMga).unwrap() < shma);
        // Six and a half hours lands half an hour after midday.
        let gedola = set.get(ZmanKey::MinchaGedolaGra).unwrap();
        let past_midday = (gedola - solar.chatzot).num_milliseconds();
        assert!((past_midday - hour / 2).abs() <= 6, "{}", past_midday);

        let dawn72 = set.get(ZmanKey::Dawn72).unwrap();
        let mga_hour = (solar.chatzot - dawn72).num_milliseconds() / 6;
        let after = |key, start: DateTime<FixedOffset>| (set.get(key).unwrap() - start).num_milliseconds();
        assert_eq!(after(ZmanKey::SevenHoursGra, solar.sunrise), hour * 7);
        assert_eq!(after(ZmanKey::NineHoursGra, solar.sunrise), hour * 9);
        assert_eq!(after(ZmanKey::SevenHoursMga, dawn72), mga_hour * 7);
        assert_eq!(after(ZmanKey::NineHoursMga, dawn72), mga_hour * 9);
        assert!(set.get(ZmanKey::MinchaGedolaGra) < set.get(ZmanKey::SevenHoursGra));
        assert!(set.get(ZmanKey::NineHoursGra) < set.get(ZmanKey::MinchaKetanaGra));
    }

    #[test]
    fn test_multiplier_table() {
        let hours = |system| -> Vec<f64> {
            PROPORTIONAL_HOURS
                .iter()
                .filter(|(_, s, _)| *s == system)
                .map(|(_, _, h)| *h)
                .collect()
        };
        let expected = vec![3.0, 4.0, 5.0, 6.5, 7.0, 9.0, 9.5, 10.75];
        assert_eq!(hours(HourSystem::Gra), expected);
        assert_eq!(hours(HourSystem::MagenAvraham), expected);
    }

    #[test]
    fn test_is_deterministic() {
        let a = derive_zmanim(date(2025, 2, 7), 2.0, &GeoCoordinate::jerusalem()).unwrap();
        let b = derive_zmanim(date(2025, 2, 7), 2.0, &GeoCoordinate::jerusalem()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_has_no_shabbat_keys() {
        let set = derive_zmanim(date(2025, 6, 20), 3.0, &GeoCoordinate::jerusalem()).unwrap();
        assert_eq!(set.len(), 24);
        assert!(set.iter().all(|(k, _)| !k.is_shabbat()));
    }

    #[test]
    fn test_polar_day_fails_whole_set() {
        let tromso = GeoCoordinate::new(69.6492, -18.9553);
        let err = derive_zmanim(date(2025, 6, 21), 2.0, &tromso).unwrap_err();
        assert!(matches!(err, LuachError::DomainUndefined { .. }));
    }

    #[test]
    fn test_bad_shift_is_rejected() {
        assert!(local_midnight(date(2025, 1, 1), 30.0).is_err());
        assert!(local_midnight(date(2025, 1, 1), f64::NAN).is_err());
        let midnight = local_midnight(date(2025, 1, 1), 5.5).unwrap();
        assert_eq!(midnight.offset().local_minus_utc(), 19_800);
        assert_eq!(midnight.hour(), 0);
    }
}
