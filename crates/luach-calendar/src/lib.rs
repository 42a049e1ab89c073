//! Hebrew calendar and timezone support for luach.

pub mod hebrew;
pub mod timezone;

pub use hebrew::{HebrewDate, HebrewMonth, is_leap_year, new_year_rd, to_hebrew};
pub use timezone::{DEFAULT_TIMEZONE, TimezoneResolver, TimezoneShift};

use chrono::{Datelike, NaiveDate};

/// R.D. day count of a Gregorian date (0001-01-01 is day 1).
pub fn rd_from_gregorian(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}
