//! Civil UTC offset of the observer's timezone, backed by the tz database.

use chrono::{Duration, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use luach_types::LuachError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timezone used when no configuration is supplied.
pub const DEFAULT_TIMEZONE: &str = "Asia/Jerusalem";

/// Signed UTC offset in effect on a given civil date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimezoneShift {
    seconds: i32,
}

impl TimezoneShift {
    pub const UTC: TimezoneShift = TimezoneShift { seconds: 0 };

    pub const fn from_seconds(seconds: i32) -> Self {
        Self { seconds }
    }

    pub const fn from_hours(hours: i32) -> Self {
        Self { seconds: hours * 3600 }
    }

    pub fn seconds(&self) -> i32 {
        self.seconds
    }

    /// Offset in (possibly fractional) hours, the unit the solar model works in.
    pub fn hours(&self) -> f64 {
        f64::from(self.seconds) / 3600.0
    }

    pub fn fixed_offset(&self) -> Option<FixedOffset> {
        FixedOffset::east_opt(self.seconds)
    }
}

impl fmt::Display for TimezoneShift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.seconds < 0 { '-' } else { '+' };
        let abs = self.seconds.unsigned_abs();
        write!(f, "{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
    }
}

/// Resolves the UTC shift of a fixed observer timezone for any date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneResolver {
    tz: Tz,
}

impl TimezoneResolver {
    /// # Errors
    /// `UnknownTimezone` if `id` is not an IANA timezone name.
    pub fn new(id: &str) -> Result<Self, LuachError> {
        let tz: Tz = id.parse().map_err(|_| {
            log::warn!("timezone `{}` is not in the tz database", id);
            LuachError::UnknownTimezone(id.to_owned())
        })?;
        Ok(Self { tz })
    }

    pub fn jerusalem() -> Self {
        Self { tz: Tz::Asia__Jerusalem }
    }

    pub fn name(&self) -> &'static str {
        self.tz.name()
    }

    /// Shift in effect on `date`.
    ///
    /// Sampled at 12:00 UTC, which is clear of the early-morning transition
    /// hour used by every zone the board is deployed in.
    pub fn shift_on(&self, date: NaiveDate) -> TimezoneShift {
        let noon = date.and_time(NaiveTime::MIN) + Duration::hours(12);
        let offset = self.tz.offset_from_utc_datetime(&noon).fix();
        TimezoneShift::from_seconds(offset.local_minus_utc())
    }

    /// Current civil date in this timezone.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }
}

impl Default for TimezoneResolver {
    fn default() -> Self {
        Self::jerusalem()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_jerusalem_summer_and_winter() {
        let r = TimezoneResolver::jerusalem();
        assert_eq!(r.shift_on(date(2025, 6, 21)), TimezoneShift::from_hours(3));
        assert_eq!(r.shift_on(date(2025, 1, 15)), TimezoneShift::from_hours(2));
    }

    #[test]
    fn test_same_date_differs_between_years() {
        // Israeli DST starts on the Friday before the last Sunday of March.
        let r = TimezoneResolver::jerusalem();
        assert_eq!(r.shift_on(date(2024, 3, 28)).hours(), 2.0);
        assert_eq!(r.shift_on(date(2025, 3, 28)).hours(), 3.0);
    }

    #[test]
    fn test_parse_by_name() {
        let r = TimezoneResolver::new(DEFAULT_TIMEZONE).unwrap();
        assert_eq!(r, TimezoneResolver::jerusalem());
        assert_eq!(r.name(), "Asia/Jerusalem");

        let ny = TimezoneResolver::new("America/New_York").unwrap();
        assert_eq!(ny.shift_on(date(2025, 1, 15)).to_string(), "-05:00");
    }

    #[test]
    fn test_unknown_timezone() {
        let err = TimezoneResolver::new("Mars/Olympus_Mons").unwrap_err();
        assert_eq!(err, LuachError::UnknownTimezone("Mars/Olympus_Mons".into()));
    }

    #[test]
    fn test_shift_display() {
        assert_eq!(TimezoneShift::from_hours(3).to_string(), "+03:00");
        assert_eq!(TimezoneShift::from_seconds(19800).to_string(), "+05:30");
        assert_eq!(TimezoneShift::UTC.hours(), 0.0);
    }
}
