//! Extension trait for `NaiveDate`.

use chrono::NaiveDate;
use luach_calendar::{HebrewDate, to_hebrew};
use luach_rules::{ParashaLookup, resolve_parasha, shabbat_of_week};
use luach_types::{GeoCoordinate, LuachError, ZmanimSet};

use crate::Luach;

/// Extends `NaiveDate` with calendar and zmanim lookups (default config).
pub trait LuachDateExt {
    fn hebrew(&self) -> Result<HebrewDate, LuachError>;

    fn parasha(&self) -> Result<ParashaLookup, LuachError>;

    /// Day and Shabbat zmanim on the default (Jerusalem) clock.
    fn zmanim_at(&self, location: &GeoCoordinate) -> Result<ZmanimSet, LuachError>;

    /// Friday and Saturday of this date's week.
    fn shabbat_week(&self) -> (NaiveDate, NaiveDate);
}

impl LuachDateExt for NaiveDate {
    fn hebrew(&self) -> Result<HebrewDate, LuachError> {
        to_hebrew(*self)
    }

    fn parasha(&self) -> Result<ParashaLookup, LuachError> {
        resolve_parasha(*self)
    }

    fn zmanim_at(&self, location: &GeoCoordinate) -> Result<ZmanimSet, LuachError> {
        Luach::default().zmanim(*self, location)
    }

    fn shabbat_week(&self) -> (NaiveDate, NaiveDate) {
        shabbat_of_week(*self)
    }
}
