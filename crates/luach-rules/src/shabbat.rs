//! Shabbat times, composed from the Friday and Saturday of a week.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Weekday};
use luach_astronomy::solar_day;
use luach_calendar::TimezoneResolver;
use luach_types::{CandleOffset, GeoCoordinate, LuachError, ZmanKey, ZmanimSet};
use smallvec::SmallVec;

/// Minutes after Saturday sunset at which Shabbat ends.
pub const SHABBAT_END_MINUTES: i64 = 35;

/// Friday and Saturday of the Shabbat a date belongs to.
///
/// Sunday through Friday look forward; Saturday maps to the Friday before it.
pub fn shabbat_of_week(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let from_friday = i64::from(date.weekday().num_days_from_monday())
        - i64::from(Weekday::Fri.num_days_from_monday());
    let friday = match from_friday {
        1 => date - Duration::days(1),
        n => date + Duration::days((-n).rem_euclid(7)),
    };
    (friday, friday + Duration::days(1))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShabbatTimes {
    pub friday: NaiveDate,
    pub candles: SmallVec<[(CandleOffset, DateTime<FixedOffset>); 3]>,
    pub end: DateTime<FixedOffset>,
    pub rabbeinu_tam: DateTime<FixedOffset>,
}

impl ShabbatTimes {
    /// Builds the week's times from the two days' sunsets.
    pub fn from_sunsets(
        friday: NaiveDate,
        friday_sunset: DateTime<FixedOffset>,
        saturday_sunset: DateTime<FixedOffset>,
        rabbeinu_tam_minutes: i64,
    ) -> Self {
        let candles = CandleOffset::ALL
            .iter()
            .map(|c| (*c, friday_sunset - Duration::minutes(c.minutes())))
            .collect();
        Self {
            friday,
            candles,
            end: saturday_sunset + Duration::minutes(SHABBAT_END_MINUTES),
            rabbeinu_tam: saturday_sunset + Duration::minutes(rabbeinu_tam_minutes),
        }
    }

    /// Composes from two already derived day sets.
    ///
    /// # Errors
    /// `InvalidInput` if either set lacks a sunset.
    pub fn compose(
        friday: NaiveDate,
        friday_set: &ZmanimSet,
        saturday_set: &ZmanimSet,
        rabbeinu_tam_minutes: i64,
    ) -> Result<Self, LuachError> {
        let sunset = |set: &ZmanimSet, field: &str| {
            set.get(ZmanKey::Sunset)
                .ok_or_else(|| LuachError::invalid_input(field, "set has no sunset"))
        };
        Ok(Self::from_sunsets(
            friday,
            sunset(friday_set, "friday")?,
            sunset(saturday_set, "saturday")?,
            rabbeinu_tam_minutes,
        ))
    }

    pub fn candle_lighting(&self, offset: CandleOffset) -> Option<DateTime<FixedOffset>> {
        self.candles
            .iter()
            .find(|(c, _)| *c == offset)
            .map(|(_, t)| *t)
    }

    pub fn to_set(&self) -> ZmanimSet {
        self.candles
            .iter()
            .map(|(c, t)| (c.key(), *t))
            .chain([
                (ZmanKey::ShabbatEnd, self.end),
                (ZmanKey::RabbeinuTam, self.rabbeinu_tam),
            ])
            .collect()
    }
}

impl From<ShabbatTimes> for ZmanimSet {
    fn from(times: ShabbatTimes) -> Self {
        times.to_set()
    }
}

/// Shabbat times for the week containing `date`, each day in its own UTC shift.
pub fn shabbat_times(
    date: NaiveDate,
    location: &GeoCoordinate,
    timezone: &TimezoneResolver,
    rabbeinu_tam_minutes: i64,
) -> Result<ShabbatTimes, LuachError> {
    let (friday, saturday) = shabbat_of_week(date);
    let friday_day = solar_day(friday, timezone.shift_on(friday).hours(), location)?;
    let saturday_day = solar_day(saturday, timezone.shift_on(saturday).hours(), location)?;
    Ok(ShabbatTimes::from_sunsets(
        friday,
        friday_day.sunset,
        saturday_day.sunset,
        rabbeinu_tam_minutes,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use luach_astronomy::derive_zmanim;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_shabbat_of_week() {
        // 2025-06-15 is a Sunday.
        for d in 15..=20 {
            assert_eq!(shabbat_of_week(date(2025, 6, d)), (date(2025, 6, 20), date(2025, 6, 21)));
        }
        assert_eq!(shabbat_of_week(date(2025, 6, 21)).0, date(2025, 6, 20));
        assert_eq!(shabbat_of_week(date(2025, 6, 22)).0, date(2025, 6, 27));
        assert_eq!(shabbat_of_week(date(2024, 12, 31)).0, date(2025, 1, 3));
    }

    #[test]
    fn test_compose_offsets() {
        let loc = GeoCoordinate::jerusalem();
        let fri = derive_zmanim(date(2025, 6, 20), 3.0, &loc).unwrap();
        let sat = derive_zmanim(date(2025, 6, 21), 3.0, &loc).unwrap();
        let times = ShabbatTimes::compose(date(2025, 6, 20), &fri, &sat, 72).unwrap();

        let fri_sunset = fri.get(ZmanKey::Sunset).unwrap();
        let sat_sunset = sat.get(ZmanKey::Sunset).unwrap();
        for offset in CandleOffset::ALL {
            let lit = times.candle_lighting(offset).unwrap();
            assert_eq!(fri_sunset - lit, Duration::minutes(offset.minutes()));
        }
        assert_eq!(times.end - sat_sunset, Duration::minutes(35));
        assert_eq!(times.rabbeinu_tam - sat_sunset, Duration::minutes(72));

        let set = times.to_set();
        assert_eq!(set.len(), 5);
        assert!(set.iter().all(|(k, _)| k.is_shabbat()));
    }

    #[test]
    fn test_rabbeinu_tam_is_configurable() {
        let sunset = derive_zmanim(date(2025, 1, 4), 2.0, &GeoCoordinate::jerusalem())
            .unwrap()
            .get(ZmanKey::Sunset)
            .unwrap();
        let times = ShabbatTimes::from_sunsets(date(2025, 1, 3), sunset, sunset, 90);
        assert_eq!(times.rabbeinu_tam - sunset, Duration::minutes(90));
    }

    #[test]
    fn test_compose_needs_sunsets() {
        let empty = ZmanimSet::default();
        assert!(ShabbatTimes::compose(date(2025, 1, 3), &empty, &empty, 72).is_err());
    }

    #[test]
    fn test_week_across_dst_change() {
        // Israel leaves summer time on 2025-10-26, a Sunday; the following
        // Friday is on winter time.
        let tz = TimezoneResolver::jerusalem();
        let times = shabbat_times(date(2025, 10, 27), &GeoCoordinate::jerusalem(), &tz, 72).unwrap();
        let lit = times.candle_lighting(CandleOffset::Minutes22).unwrap();
        assert_eq!(lit.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(times.friday, date(2025, 10, 31));
    }
}
