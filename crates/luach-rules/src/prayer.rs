//! Resolving configured prayer entries against a day's zmanim.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use luach_types::{PrayerEntry, PrayerRecord, ZmanimSet};
use serde::{Serialize, Serializer};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// A clock time, or the explicit absence of one.
///
/// `Unresolved` keeps "no data" apart from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTime {
    At(NaiveTime),
    Unresolved,
}

impl ResolvedTime {
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            ResolvedTime::At(t) => Some(*t),
            ResolvedTime::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolvedTime::At(_))
    }
}

impl fmt::Display for ResolvedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedTime::At(t) => write!(f, "{}", t.format("%H:%M")),
            ResolvedTime::Unresolved => f.write_str("--:--"),
        }
    }
}

/// `"HH:MM"` or `null`.
impl Serialize for ResolvedTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResolvedTime::At(_) => serializer.serialize_str(&self.to_string()),
            ResolvedTime::Unresolved => serializer.serialize_none(),
        }
    }
}

/// Resolves one entry.
///
/// Fixed times pass through. Relative entries take the referenced zman's
/// wall-clock hour and minute, add the offset and wrap into one day.
pub fn resolve(entry: &PrayerEntry, zmanim: &ZmanimSet) -> ResolvedTime {
    match entry {
        PrayerEntry::Fixed { clock_time } => ResolvedTime::At(*clock_time),
        PrayerEntry::Relative {
            reference_key,
            offset_minutes,
        } => {
            let Some(base) = zmanim.get_named(reference_key) else {
                log::debug!("prayer references missing zman `{}`", reference_key);
                return ResolvedTime::Unresolved;
            };
            // Reduce first so extreme offsets cannot overflow.
            let offset = offset_minutes.rem_euclid(MINUTES_PER_DAY);
            let minutes = i64::from(base.hour() * 60 + base.minute()) + offset;
            let wrapped = minutes.rem_euclid(MINUTES_PER_DAY);
            NaiveTime::from_hms_opt((wrapped / 60) as u32, (wrapped % 60) as u32, 0)
                .map_or(ResolvedTime::Unresolved, ResolvedTime::At)
        }
    }
}

/// Resolves a content-API row; incomplete rows are unresolved.
pub fn resolve_record(record: &PrayerRecord, zmanim: &ZmanimSet) -> ResolvedTime {
    record
        .entry()
        .map_or(ResolvedTime::Unresolved, |entry| resolve(&entry, zmanim))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPrayer {
    pub name: String,
    pub time: ResolvedTime,
}

/// Resolves a whole schedule, keeping its order.
pub fn resolve_schedule(records: &[PrayerRecord], zmanim: &ZmanimSet) -> Vec<ResolvedPrayer> {
    records
        .iter()
        .map(|record| ResolvedPrayer {
            name: record.name.clone(),
            time: resolve_record(record, zmanim),
        })
        .collect()
}
