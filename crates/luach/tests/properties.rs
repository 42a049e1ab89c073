use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use luach::{GeoCoordinate, PrayerEntry, ResolvedTime, ZmanKey, ZmanimSet, derive_zmanim, resolve};
use proptest::prelude::*;

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset)
}

const ORDER: [ZmanKey; 8] = [
    ZmanKey::Dawn90,
    ZmanKey::Dawn72,
    ZmanKey::TallitTefillin,
    ZmanKey::Sunrise,
    ZmanKey::Chatzot,
    ZmanKey::Sunset,
    ZmanKey::Nightfall,
    ZmanKey::Nightfall90,
];

proptest! {
    /// Sunset mirrors sunrise around midday, to the millisecond.
    #[test]
    fn sunset_mirrors_sunrise(days in 0i64..36_500, lat in -59.0f64..59.0, lng in -180.0f64..180.0) {
        let loc = GeoCoordinate::new(lat, lng);
        if let Ok(set) = derive_zmanim(day(days), 2.0, &loc) {
            let sunrise = set.get(ZmanKey::Sunrise).unwrap();
            let chatzot = set.get(ZmanKey::Chatzot).unwrap();
            let sunset = set.get(ZmanKey::Sunset).unwrap();
            prop_assert_eq!(sunset - chatzot, chatzot - sunrise);
        }
    }

    /// At moderate latitudes every angle is reached and the day is strictly ordered.
    #[test]
    fn zmanim_strictly_ordered(days in 0i64..36_500, lat in -45.0f64..45.0, lng in -180.0f64..180.0) {
        let set = derive_zmanim(day(days), 0.0, &GeoCoordinate::new(lat, lng)).unwrap();
        for pair in ORDER.windows(2) {
            prop_assert!(set.get(pair[0]).unwrap() < set.get(pair[1]).unwrap(), "{:?}", pair);
        }
    }

    /// Same inputs, same timestamps.
    #[test]
    fn derivation_is_idempotent(days in 0i64..36_500, lat in -50.0f64..50.0, shift in -12i32..=14) {
        let loc = GeoCoordinate::new(lat, -35.0);
        let a = derive_zmanim(day(days), f64::from(shift), &loc);
        let b = derive_zmanim(day(days), f64::from(shift), &loc);
        prop_assert_eq!(a, b);
    }

    /// Offsets wrap into one day in both directions.
    #[test]
    fn relative_offsets_wrap(h in 0u32..24, m in 0u32..60, offset in -5_000i64..5_000) {
        let base = day(0)
            .and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap())
            .and_utc()
            .fixed_offset();
        let set: ZmanimSet = [(ZmanKey::Sunset, base)].into_iter().collect();
        let resolved = resolve(&PrayerEntry::relative("sunset", offset), &set);
        let ResolvedTime::At(t) = resolved else {
            return Err(TestCaseError::fail("unresolved"));
        };
        let expected = (i64::from(h * 60 + m) + offset).rem_euclid(1440);
        prop_assert_eq!(i64::from(t.hour() * 60 + t.minute()), expected);
        if offset == 0 {
            prop_assert_eq!((t.hour(), t.minute()), (h, m));
        }
    }
}
