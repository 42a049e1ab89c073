//! Hebrew dates for the board.
//!
//! Year structure (molad, postponements, month lengths) comes from
//! `calendrical_calculations`. This module adapts it to chrono dates, adds
//! month names, Hebrew numerals and a per-thread conversion cache.
//!
//! Dates are exchanged through the R.D. fixed day count ("rd"), where
//! 0001-01-01 (proleptic Gregorian) is day 1. This is the same count chrono
//! exposes as `num_days_from_ce`, so Gregorian conversion is a single call.

use calendrical_calculations::hebrew_keviyah::YearInfo;
use calendrical_calculations::rata_die::RataDie;
use chrono::{Datelike, NaiveDate};
use luach_types::LuachError;
use luach_types::error::{MAX_GREGORIAN_YEAR, MIN_GREGORIAN_YEAR};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;

/// Hebrew months in civil order (the year starts at Tishrei).
///
/// `Adar` exists only in common years, `AdarI`/`AdarII` only in leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HebrewMonth {
    Tishrei,
    Cheshvan,
    Kislev,
    Tevet,
    Shevat,
    Adar,
    AdarI,
    AdarII,
    Nisan,
    Iyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
}

const COMMON_MONTHS: [HebrewMonth; 12] = [
    HebrewMonth::Tishrei,
    HebrewMonth::Cheshvan,
    HebrewMonth::Kislev,
    HebrewMonth::Tevet,
    HebrewMonth::Shevat,
    HebrewMonth::Adar,
    HebrewMonth::Nisan,
    HebrewMonth::Iyar,
    HebrewMonth::Sivan,
    HebrewMonth::Tammuz,
    HebrewMonth::Av,
    HebrewMonth::Elul,
];

const LEAP_MONTHS: [HebrewMonth; 13] = [
    HebrewMonth::Tishrei,
    HebrewMonth::Cheshvan,
    HebrewMonth::Kislev,
    HebrewMonth::Tevet,
    HebrewMonth::Shevat,
    HebrewMonth::AdarI,
    HebrewMonth::AdarII,
    HebrewMonth::Nisan,
    HebrewMonth::Iyar,
    HebrewMonth::Sivan,
    HebrewMonth::Tammuz,
    HebrewMonth::Av,
    HebrewMonth::Elul,
];

impl HebrewMonth {
    pub fn hebrew_name(&self) -> &'static str {
        match self {
            HebrewMonth::Tishrei => "תשרי",
            HebrewMonth::Cheshvan => "חשוון",
            HebrewMonth::Kislev => "כסלו",
            HebrewMonth::Tevet => "טבת",
            HebrewMonth::Shevat => "שבט",
            HebrewMonth::Adar => "אדר",
            HebrewMonth::AdarI => "אדר א׳",
            HebrewMonth::AdarII => "אדר ב׳",
            HebrewMonth::Nisan => "ניסן",
            HebrewMonth::Iyar => "אייר",
            HebrewMonth::Sivan => "סיוון",
            HebrewMonth::Tammuz => "תמוז",
            HebrewMonth::Av => "אב",
            HebrewMonth::Elul => "אלול",
        }
    }
}

impl fmt::Display for HebrewMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HebrewMonth::Tishrei => "Tishrei",
            HebrewMonth::Cheshvan => "Cheshvan",
            HebrewMonth::Kislev => "Kislev",
            HebrewMonth::Tevet => "Tevet",
            HebrewMonth::Shevat => "Shevat",
            HebrewMonth::Adar => "Adar",
            HebrewMonth::AdarI => "Adar I",
            HebrewMonth::AdarII => "Adar II",
            HebrewMonth::Nisan => "Nisan",
            HebrewMonth::Iyar => "Iyar",
            HebrewMonth::Sivan => "Sivan",
            HebrewMonth::Tammuz => "Tammuz",
            HebrewMonth::Av => "Av",
            HebrewMonth::Elul => "Elul",
        };
        write!(f, "{}", s)
    }
}

fn year_info(year: i32) -> YearInfo {
    YearInfo::compute_for(year)
}

/// 7 of every 19 years carry a second Adar.
pub fn is_leap_year(year: i32) -> bool {
    year_info(year).keviyah.is_leap()
}

/// R.D. of 1 Tishrei of `year`.
pub fn new_year_rd(year: i32) -> i64 {
    year_info(year).new_year().to_i64_date()
}

/// 353-355 days for common years, 383-385 for leap years.
pub fn year_length(year: i32) -> i64 {
    i64::from(year_info(year).keviyah.year_length())
}

/// Months of `year` in civil order.
pub fn months_in_year(year: i32) -> &'static [HebrewMonth] {
    if is_leap_year(year) {
        &LEAP_MONTHS
    } else {
        &COMMON_MONTHS
    }
}

/// 1-based civil ordinal of `month` in `year`, as the backend counts months.
fn ordinal(year: i32, month: HebrewMonth) -> Option<u8> {
    months_in_year(year)
        .iter()
        .position(|m| *m == month)
        .map(|i| i as u8 + 1)
}

/// Length of `month` in `year`, or `None` when the month does not occur that year.
pub fn month_length(year: i32, month: HebrewMonth) -> Option<u8> {
    ordinal(year, month).map(|o| year_info(year).keviyah.month_len(o))
}

/// A date in the Hebrew calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HebrewDate {
    pub year: i32,
    pub month: HebrewMonth,
    pub day: u8,
}

impl HebrewDate {
    /// # Errors
    /// `InvalidInput` if the month does not occur in `year` or `day` exceeds its length.
    pub fn new(year: i32, month: HebrewMonth, day: u8) -> Result<Self, LuachError> {
        if year < 1 {
            return Err(LuachError::invalid_input("year", format!("{} precedes the epoch", year)));
        }
        let len = month_length(year, month).ok_or_else(|| {
            LuachError::invalid_input("month", format!("{} does not occur in {}", month, year))
        })?;
        if day == 0 || day > len {
            return Err(LuachError::invalid_input(
                "day",
                format!("{} {} has {} days, got {}", month, year, len, day),
            ));
        }
        Ok(Self { year, month, day })
    }

    /// Converts an R.D. day count.
    pub fn from_rd(rd: i64) -> Self {
        let (info, year) = YearInfo::year_containing_rd(RataDie::new(rd));
        let day_of_year = (rd - info.new_year().to_i64_date() + 1) as u16;
        let (ord, day) = info.keviyah.month_day_for(day_of_year);
        let month = months_in_year(year)
            .get(usize::from(ord).saturating_sub(1))
            .copied()
            .unwrap_or(HebrewMonth::Elul);
        Self { year, month, day }
    }

    /// R.D. day count of this date.
    pub fn rd(&self) -> i64 {
        let info = year_info(self.year);
        let before = ordinal(self.year, self.month)
            .map(|o| i64::from(info.keviyah.days_preceding(o)))
            .unwrap_or(0);
        info.new_year().to_i64_date() + before + i64::from(self.day) - 1
    }

    /// # Errors
    /// `DateOutOfRange` outside Gregorian years 1..=9999.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, LuachError> {
        if date.year() < MIN_GREGORIAN_YEAR || date.year() > MAX_GREGORIAN_YEAR {
            return Err(LuachError::date_out_of_range(date));
        }
        Ok(Self::from_rd(i64::from(date.num_days_from_ce())))
    }

    pub fn to_gregorian(&self) -> Option<NaiveDate> {
        i32::try_from(self.rd())
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// 0-based position of the month within its year, counted from Tishrei.
    pub fn month_index(&self) -> u8 {
        ordinal(self.year, self.month).map_or(0, |o| o - 1)
    }

    /// Hebrew rendering, e.g. `כ׳ חשוון תשפ״ה`.
    pub fn formatted(&self) -> String {
        format!(
            "{} {} {}",
            hebrew_numeral(u32::from(self.day)),
            self.month.hebrew_name(),
            hebrew_numeral(self.year.rem_euclid(1000) as u32)
        )
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}

const NUMERALS: [(u32, char); 22] = [
    (400, 'ת'),
    (300, 'ש'),
    (200, 'ר'),
    (100, 'ק'),
    (90, 'צ'),
    (80, 'פ'),
    (70, 'ע'),
    (60, 'ס'),
    (50, 'נ'),
    (40, 'מ'),
    (30, 'ל'),
    (20, 'כ'),
    (10, 'י'),
    (9, 'ט'),
    (8, 'ח'),
    (7, 'ז'),
    (6, 'ו'),
    (5, 'ה'),
    (4, 'ד'),
    (3, 'ג'),
    (2, 'ב'),
    (1, 'א'),
];

/// Hebrew numeral with geresh (single letter) or gershayim before the last letter.
pub fn hebrew_numeral(mut n: u32) -> String {
    let mut letters: Vec<char> = Vec::new();
    while n > 0 {
        // 15 and 16 avoid spelling the divine name.
        if n == 15 || n == 16 {
            letters.push('ט');
            letters.push(if n == 15 { 'ו' } else { 'ז' });
            break;
        }
        let Some(&(value, letter)) = NUMERALS.iter().find(|(v, _)| *v <= n) else {
            break;
        };
        letters.push(letter);
        n -= value;
    }

    match letters.len() {
        0 => String::new(),
        1 => format!("{}׳", letters[0]),
        len => {
            let mut s: String = letters[..len - 1].iter().collect();
            s.push('״');
            s.push(letters[len - 1]);
            s
        }
    }
}

// Thread-local cache: last converted gregorian date.
thread_local! {
    static HEBREW_CACHE: RefCell<Option<(NaiveDate, HebrewDate)>> = const { RefCell::new(None) };
}

/// Converts a Gregorian date to the Hebrew calendar.
///
/// # Errors
/// Returns `DateOutOfRange` outside Gregorian years 1..=9999.
pub fn to_hebrew(date: NaiveDate) -> Result<HebrewDate, LuachError> {
    let cached = HEBREW_CACHE.with(|cache| {
        cache
            .borrow()
            .as_ref()
            .and_then(|(d, h)| (*d == date).then_some(*h))
    });
    if let Some(h) = cached {
        return Ok(h);
    }

    let hebrew = HebrewDate::from_gregorian(date)?;

    HEBREW_CACHE.with(|cache| {
        *cache.borrow_mut() = Some((date, hebrew));
    });
    Ok(hebrew)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greg(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rosh_hashana_5785() {
        let rh = HebrewDate::new(5785, HebrewMonth::Tishrei, 1).unwrap();
        assert_eq!(rh.to_gregorian(), Some(greg(2024, 10, 3)));
        assert_eq!(new_year_rd(5785), i64::from(greg(2024, 10, 3).num_days_from_ce()));
    }

    #[test]
    fn test_known_conversions() {
        let h = to_hebrew(greg(2024, 11, 21)).unwrap();
        assert_eq!((h.year, h.month, h.day), (5785, HebrewMonth::Cheshvan, 20));

        // Pesach 5784 and Purim 5784 (leap year, Adar II).
        let pesach = to_hebrew(greg(2024, 4, 23)).unwrap();
        assert_eq!((pesach.month, pesach.day), (HebrewMonth::Nisan, 15));
        let purim = to_hebrew(greg(2024, 3, 24)).unwrap();
        assert_eq!((purim.month, purim.day), (HebrewMonth::AdarII, 14));
    }

    #[test]
    fn test_leap_years_and_lengths() {
        assert!(is_leap_year(5784));
        assert!(!is_leap_year(5785));
        assert!(is_leap_year(5787));
        assert_eq!(year_length(5784), 383);
        assert_eq!(year_length(5785), 355);
        assert_eq!(year_length(5786), 354);
    }

    #[test]
    fn test_rosh_hashana_across_table_years() {
        for (year, y, m, d) in [
            (5771, 2010, 9, 9),
            (5776, 2015, 9, 14),
            (5781, 2020, 9, 19),
            (5788, 2027, 10, 2),
            (5789, 2028, 9, 21),
        ] {
            assert_eq!(new_year_rd(year), i64::from(greg(y, m, d).num_days_from_ce()), "{}", year);
        }
    }

    #[test]
    fn test_adar_one_and_two_in_leap_year() {
        let adar_i = HebrewDate::new(5784, HebrewMonth::AdarI, 1).unwrap();
        assert_eq!(adar_i.to_gregorian(), Some(greg(2024, 2, 10)));
        assert_eq!(month_length(5784, HebrewMonth::AdarI), Some(30));
        assert_eq!(month_length(5784, HebrewMonth::AdarII), Some(29));
        assert_eq!(month_length(5785, HebrewMonth::Adar), Some(29));
        // 5785 is a complete year: Cheshvan has 30 days.
        assert_eq!(month_length(5785, HebrewMonth::Cheshvan), Some(30));
    }

    #[test]
    fn test_rd_round_trip_over_several_years() {
        let start = greg(2019, 1, 1);
        for offset in 0..(365 * 6) {
            let date = start + chrono::Duration::days(offset);
            let h = HebrewDate::from_gregorian(date).unwrap();
            assert_eq!(h.to_gregorian(), Some(date), "{} -> {}", date, h);
        }
    }

    #[test]
    fn test_month_index_is_zero_based_from_tishrei() {
        let leap = HebrewDate::new(5784, HebrewMonth::Nisan, 1).unwrap();
        let common = HebrewDate::new(5785, HebrewMonth::Nisan, 1).unwrap();
        assert_eq!(leap.month_index(), 7);
        assert_eq!(common.month_index(), 6);
        assert_eq!(HebrewDate::new(5785, HebrewMonth::Tishrei, 1).unwrap().month_index(), 0);
    }

    #[test]
    fn test_month_not_in_year_rejected() {
        assert!(HebrewDate::new(5785, HebrewMonth::AdarII, 1).is_err());
        assert!(HebrewDate::new(5784, HebrewMonth::Adar, 1).is_err());
        assert!(HebrewDate::new(5785, HebrewMonth::Elul, 30).is_err());
    }

    #[test]
    fn test_formatting() {
        let h = to_hebrew(greg(2024, 11, 21)).unwrap();
        assert_eq!(h.formatted(), "כ׳ חשוון תשפ״ה");
        let pesach = HebrewDate::new(5784, HebrewMonth::Nisan, 15).unwrap();
        assert_eq!(pesach.formatted(), "ט״ו ניסן תשפ״ד");
        assert_eq!(hebrew_numeral(16), "ט״ז");
        assert_eq!(hebrew_numeral(1), "א׳");
        assert_eq!(hebrew_numeral(30), "ל׳");
    }

    #[test]
    fn test_out_of_range_error() {
        let bad = NaiveDate::from_ymd_opt(-500, 1, 1).unwrap();
        assert!(matches!(to_hebrew(bad), Err(LuachError::DateOutOfRange { .. })));
    }

    #[test]
    fn test_cache_hit() {
        let date = greg(2025, 6, 21);
        let h1 = to_hebrew(date).unwrap();
        let h2 = to_hebrew(date).unwrap();
        assert_eq!(h1, h2);
    }
}
