use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A scheduled prayer as configured on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PrayerEntry {
    /// Fixed wall-clock time.
    #[serde(rename_all = "camelCase")]
    Fixed { clock_time: NaiveTime },
    /// Offset in minutes (may be negative) from a named zman.
    #[serde(rename_all = "camelCase")]
    Relative {
        reference_key: String,
        offset_minutes: i64,
    },
}

impl PrayerEntry {
    pub fn fixed(clock_time: NaiveTime) -> Self {
        Self::Fixed { clock_time }
    }

    pub fn relative(reference_key: impl Into<String>, offset_minutes: i64) -> Self {
        Self::Relative {
            reference_key: reference_key.into(),
            offset_minutes,
        }
    }
}

/// A prayer row as delivered by the content API: every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerRecord {
    pub name: String,
    /// `"HH:MM"` clock time.
    pub time: Option<String>,
    /// Reference zman wire name.
    pub zman: Option<String>,
    /// Minutes relative to `zman`.
    pub offset: Option<i64>,
}

impl PrayerRecord {
    /// Interprets the row. A parseable `time` wins; otherwise both `zman` and
    /// `offset` must be present. Returns `None` when neither form is complete.
    pub fn entry(&self) -> Option<PrayerEntry> {
        if let Some(time) = self.time.as_deref().and_then(parse_clock) {
            return Some(PrayerEntry::fixed(time));
        }
        match (self.zman.as_deref(), self.offset) {
            (Some(zman), Some(offset)) if !zman.trim().is_empty() => {
                Some(PrayerEntry::relative(zman.trim(), offset))
            }
            _ => None,
        }
    }
}

fn parse_clock(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}
