//! Weekly Torah reading lookup.
//!
//! Each Hebrew year carries its own ordered list of weekly rules, because
//! the number of weeks around the festivals (and which portions are
//! doubled) depends on the year's length and on the weekday its festivals
//! fall on. A year with no rules is a coverage gap, not an error.

use std::borrow::Cow;
use std::fmt;

use chrono::NaiveDate;
use luach_calendar::{HebrewDate, is_leap_year, new_year_rd, to_hebrew};
use luach_types::LuachError;
use serde::{Deserialize, Serialize};

use crate::parasha_table::BUILTIN;

/// The 53 weekly portions in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Parasha {
    Bereshit,
    Noach,
    LechLecha,
    Vayera,
    ChayeiSara,
    Toldot,
    Vayetzei,
    Vayishlach,
    Vayeshev,
    Miketz,
    Vayigash,
    Vayechi,
    Shemot,
    Vaera,
    Bo,
    Beshalach,
    Yitro,
    Mishpatim,
    Terumah,
    Tetzaveh,
    KiTisa,
    Vayakhel,
    Pekudei,
    Vayikra,
    Tzav,
    Shmini,
    Tazria,
    Metzora,
    AchreiMot,
    Kedoshim,
    Emor,
    Behar,
    Bechukotai,
    Bamidbar,
    Nasso,
    Behaalotcha,
    Shlach,
    Korach,
    Chukat,
    Balak,
    Pinchas,
    Matot,
    Masei,
    Devarim,
    Vaetchanan,
    Eikev,
    Reeh,
    Shoftim,
    KiTeitzei,
    KiTavo,
    Nitzavim,
    Vayeilech,
    Haazinu,
}

const HEBREW_NAMES: [&str; 53] = [
    "בראשית", "נח", "לך לך", "וירא", "חיי שרה", "תולדות", "ויצא", "וישלח", "וישב", "מקץ",
    "ויגש", "ויחי", "שמות", "וארא", "בא", "בשלח", "יתרו", "משפטים", "תרומה", "תצוה",
    "כי תשא", "ויקהל", "פקודי", "ויקרא", "צו", "שמיני", "תזריע", "מצורע", "אחרי מות",
    "קדושים", "אמור", "בהר", "בחוקותי", "במדבר", "נשא", "בהעלותך", "שלח לך", "קרח", "חוקת",
    "בלק", "פינחס", "מטות", "מסעי", "דברים", "ואתחנן", "עקב", "ראה", "שופטים", "כי תצא",
    "כי תבוא", "נצבים", "וילך", "האזינו",
];

impl Parasha {
    pub fn hebrew_name(&self) -> &'static str {
        HEBREW_NAMES[*self as usize]
    }
}

impl fmt::Display for Parasha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hebrew_name())
    }
}

/// What is read on the Shabbat closing a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Reading {
    Single(Parasha),
    /// Two portions joined, displayed as `"X-Y"`.
    Double(Parasha, Parasha),
    /// Festival Shabbat or no portion determined; displays as `""`.
    #[default]
    Blank,
}

impl Reading {
    pub fn is_blank(&self) -> bool {
        matches!(self, Reading::Blank)
    }

    /// Portions read, in order.
    pub fn portions(&self) -> Vec<Parasha> {
        match *self {
            Reading::Single(p) => vec![p],
            Reading::Double(a, b) => vec![a, b],
            Reading::Blank => Vec::new(),
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Single(p) => write!(f, "{}", p),
            Reading::Double(a, b) => write!(f, "{}-{}", a, b),
            Reading::Blank => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSpan {
    /// Half-open `[anchor, anchor + 7)`.
    Week,
    /// The anchor day only.
    Day,
}

/// One boundary rule, anchored on an absolute day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub anchor: i64,
    pub span: RuleSpan,
    pub reading: Reading,
}

impl Rule {
    pub fn matches(&self, rd: i64) -> bool {
        match self.span {
            RuleSpan::Week => (self.anchor..self.anchor + 7).contains(&rd),
            RuleSpan::Day => rd == self.anchor,
        }
    }
}

/// Rules for one Hebrew year.
///
/// Week `i` is anchored `7 * i` days after the Sunday on or before
/// 1 Tishrei. From `exact_from` onward the rules match their anchor day
/// only; the 5781 and 5788 tables have always behaved that way and keep it.
///
/// `overrides` follow the weekly rules in rule order, so a matching
/// override replaces whatever the weeks say for that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRules {
    pub year: i32,
    pub leap: bool,
    pub exact_from: Option<usize>,
    pub weeks: &'static [Reading],
    pub overrides: &'static [Rule],
}

impl YearRules {
    /// Sunday on or before Rosh Hashana.
    pub fn base_anchor(&self) -> i64 {
        let new_year = new_year_rd(self.year);
        new_year - new_year.rem_euclid(7)
    }

    pub fn rule(&self, index: usize) -> Option<Rule> {
        let reading = *self.weeks.get(index)?;
        let span = match self.exact_from {
            Some(from) if index >= from => RuleSpan::Day,
            _ => RuleSpan::Week,
        };
        Some(Rule {
            anchor: self.base_anchor() + 7 * index as i64,
            span,
            reading,
        })
    }

    pub fn with_overrides(self, overrides: &'static [Rule]) -> Self {
        Self { overrides, ..self }
    }

    /// Weekly rules in anchor order, then the overrides.
    pub fn rules(&self) -> impl DoubleEndedIterator<Item = Rule> + '_ {
        (0..self.weeks.len())
            .filter_map(|i| self.rule(i))
            .chain(self.overrides.iter().copied())
    }

    /// Last matching rule wins; no match is a blank week.
    pub fn resolve(&self, rd: i64) -> Reading {
        if let Some(rule) = self.overrides.iter().rev().find(|r| r.matches(rd)) {
            return rule.reading;
        }
        let base = self.base_anchor();
        if rd < base {
            return Reading::Blank;
        }
        // Anchors are evenly spaced, so the partition point is arithmetic.
        let upto = (((rd - base) / 7) as usize + 1).min(self.weeks.len());
        (0..upto)
            .rev()
            .filter_map(|i| self.rule(i))
            .find(|r| r.matches(rd))
            .map_or(Reading::Blank, |r| r.reading)
    }
}

/// Outcome of a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParashaLookup {
    Found(Reading),
    /// No table for this Hebrew year.
    CoverageGap { year: i32 },
}

impl ParashaLookup {
    pub fn reading(&self) -> Option<Reading> {
        match self {
            ParashaLookup::Found(r) => Some(*r),
            ParashaLookup::CoverageGap { .. } => None,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, ParashaLookup::CoverageGap { .. })
    }

    /// Display string; empty for blank weeks and for gaps.
    pub fn name(&self) -> String {
        self.reading().map(|r| r.to_string()).unwrap_or_default()
    }
}

/// Year tables sorted by `(year, leap)`.
#[derive(Debug, Clone)]
pub struct ParashaTable {
    years: Cow<'static, [YearRules]>,
}

impl Default for ParashaTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ParashaTable {
    /// The Israel schedule for 5771 through 5789.
    pub const fn builtin() -> Self {
        Self {
            years: Cow::Borrowed(BUILTIN),
        }
    }

    /// Adds or replaces one year's table, leaving the others untouched.
    ///
    /// # Errors
    /// `InvalidInput` if the leap flag disagrees with the calendar or the
    /// year has no weeks.
    pub fn with_year(mut self, rules: YearRules) -> Result<Self, LuachError> {
        if rules.leap != is_leap_year(rules.year) {
            return Err(LuachError::invalid_input(
                "leap",
                format!("{} is {}a leap year", rules.year, if rules.leap { "not " } else { "" }),
            ));
        }
        if rules.weeks.is_empty() {
            return Err(LuachError::invalid_input("weeks", format!("no weeks for {}", rules.year)));
        }
        let years = self.years.to_mut();
        match years.binary_search_by_key(&rules.year, |y| y.year) {
            Ok(i) => years[i] = rules,
            Err(i) => years.insert(i, rules),
        }
        Ok(self)
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.iter().map(|y| y.year)
    }

    pub fn year(&self, year: i32) -> Option<&YearRules> {
        let key = (year, is_leap_year(year));
        self.years
            .binary_search_by_key(&key, |y| (y.year, y.leap))
            .ok()
            .map(|i| &self.years[i])
    }

    pub fn lookup(&self, date: &HebrewDate) -> ParashaLookup {
        match self.year(date.year) {
            Some(rules) => ParashaLookup::Found(rules.resolve(date.rd())),
            None => {
                log::warn!("no reading table for Hebrew year {}", date.year);
                ParashaLookup::CoverageGap { year: date.year }
            }
        }
    }

    /// # Errors
    /// `DateOutOfRange` if the date cannot be converted.
    pub fn lookup_gregorian(&self, date: NaiveDate) -> Result<ParashaLookup, LuachError> {
        Ok(self.lookup(&to_hebrew(date)?))
    }
}

/// Looks `date` up in the built-in table.
pub fn resolve_parasha(date: NaiveDate) -> Result<ParashaLookup, LuachError> {
    ParashaTable::builtin().lookup_gregorian(date)
}

/// Display name for `date`'s week, `""` when none is determined.
pub fn parasha_name(date: NaiveDate) -> Result<String, LuachError> {
    Ok(resolve_parasha(date)?.name())
}
