//! Core engine for luach.
//!
//! Ties the layers together: a validated request goes through the timezone
//! lookup and the zmanim derivation, the week's Shabbat times are merged in,
//! and the reading for the date is attached.

pub mod cache;
pub mod config;
pub mod extension;
pub mod report;
pub mod request;

pub use cache::{CacheKey, ZmanimCache};
pub use config::{LuachConfig, LuachConfigBuilder};
pub use extension::LuachDateExt;
pub use report::{DayReport, HebrewSummary};
pub use request::ZmanimRequest;

pub use luach_astronomy::{SolarDay, SolarPosition, derive_zmanim, solar_day, solar_position};
pub use luach_calendar::{HebrewDate, HebrewMonth, TimezoneResolver, TimezoneShift, to_hebrew};
pub use luach_rules::{
    Parasha, ParashaLookup, ParashaTable, Reading, ResolvedPrayer, ResolvedTime, ShabbatTimes,
    YearRules, parasha_name, resolve, resolve_parasha, resolve_record, resolve_schedule,
    shabbat_of_week,
};
pub use luach_types::{
    CandleOffset, GeoCoordinate, LuachError, PrayerEntry, PrayerRecord, ZmanKey, ZmanimSet,
};

pub mod prelude {
    pub use crate::{
        DayReport, GeoCoordinate, Luach, LuachConfig, LuachDateExt, LuachError, PrayerEntry,
        ResolvedTime, ZmanKey, ZmanimRequest, ZmanimSet, compute_day,
    };
}

use chrono::NaiveDate;
use luach_rules::shabbat_times;

/// The engine: configuration plus the resources derived from it.
#[derive(Debug)]
pub struct Luach {
    config: LuachConfig,
    timezone: TimezoneResolver,
    table: ParashaTable,
    cache: Option<ZmanimCache>,
}

impl Default for Luach {
    fn default() -> Self {
        Self {
            config: LuachConfig::default(),
            timezone: TimezoneResolver::default(),
            table: ParashaTable::builtin(),
            cache: None,
        }
    }
}

impl Luach {
    /// # Errors
    /// Whatever `LuachConfig::validate` rejects.
    pub fn new(config: LuachConfig) -> Result<Self, LuachError> {
        config.validate()?;
        let timezone = config.resolver()?;
        let cache = (config.cache_capacity > 0).then(|| ZmanimCache::new(config.cache_capacity));
        Ok(Self {
            config,
            timezone,
            table: ParashaTable::builtin(),
            cache,
        })
    }

    /// Replaces the reading table, e.g. one extended with later years.
    pub fn with_table(mut self, table: ParashaTable) -> Self {
        self.table = table;
        self
    }

    pub fn config(&self) -> &LuachConfig {
        &self.config
    }

    pub fn timezone(&self) -> &TimezoneResolver {
        &self.timezone
    }

    pub fn cache(&self) -> Option<&ZmanimCache> {
        self.cache.as_ref()
    }

    /// The day's own zmanim on the local clock of that date.
    pub fn day_zmanim(&self, date: NaiveDate, location: &GeoCoordinate) -> Result<ZmanimSet, LuachError> {
        derive_zmanim(date, self.timezone.shift_on(date).hours(), location)
    }

    pub fn shabbat(&self, date: NaiveDate, location: &GeoCoordinate) -> Result<ShabbatTimes, LuachError> {
        shabbat_times(date, location, &self.timezone, self.config.rabbeinu_tam_minutes)
    }

    /// Day zmanim merged with the week's Shabbat keys; cached when enabled.
    pub fn zmanim(&self, date: NaiveDate, location: &GeoCoordinate) -> Result<ZmanimSet, LuachError> {
        let compute = || -> Result<ZmanimSet, LuachError> {
            let day = self.day_zmanim(date, location)?;
            let shabbat = self.shabbat(date, location)?;
            Ok(day.merged(&ZmanimSet::from(shabbat)))
        };
        match &self.cache {
            Some(cache) => cache.get_or_try_insert(CacheKey::new(date, location), compute),
            None => compute(),
        }
    }

    pub fn parasha(&self, date: NaiveDate) -> Result<ParashaLookup, LuachError> {
        self.table.lookup_gregorian(date)
    }

    /// Assembles the full report for one date and location.
    pub fn report(&self, date: NaiveDate, location: &GeoCoordinate) -> Result<DayReport, LuachError> {
        log::debug!(
            "report for {} at {} (shift {})",
            date,
            location,
            self.timezone.shift_on(date)
        );
        let times = self.zmanim(date, location)?;
        let hebrew = to_hebrew(date)?;
        let parasha = match self.table.lookup(&hebrew) {
            ParashaLookup::Found(reading) => Some(reading.to_string()),
            ParashaLookup::CoverageGap { .. } => None,
        };

        Ok(DayReport {
            date,
            location: *location,
            hebrew: HebrewSummary::from(&hebrew),
            parasha,
            times,
            candle_lighting: self.config.candle_lighting.key(),
        })
    }

    /// Validates a raw request (missing date means today on the board's clock)
    /// and reports on it.
    pub fn handle(&self, request: &ZmanimRequest) -> Result<DayReport, LuachError> {
        let (location, date) = request.validate_at(self.timezone.today())?;
        self.report(date, &location)
    }

    pub fn resolve_prayers(&self, records: &[PrayerRecord], zmanim: &ZmanimSet) -> Vec<ResolvedPrayer> {
        resolve_schedule(records, zmanim)
    }
}

/// Report with the default configuration.
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use luach_core::{GeoCoordinate, ZmanKey, compute_day};
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
/// let report = compute_day(date, &GeoCoordinate::jerusalem()).unwrap();
/// assert!(report.times.contains(ZmanKey::ShabbatCandles22));
/// ```
pub fn compute_day(date: NaiveDate, location: &GeoCoordinate) -> Result<DayReport, LuachError> {
    Luach::default().report(date, location)
}
