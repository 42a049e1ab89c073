//! The per-day response handed to the display.

use chrono::NaiveDate;
use luach_calendar::HebrewDate;
use luach_types::{GeoCoordinate, ZmanKey, ZmanimSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HebrewSummary {
    pub day: u8,
    /// 0-based from Tishrei.
    pub month: u8,
    pub year: i32,
    pub formatted: String,
}

impl From<&HebrewDate> for HebrewSummary {
    fn from(date: &HebrewDate) -> Self {
        Self {
            day: date.day,
            month: date.month_index(),
            year: date.year,
            formatted: date.formatted(),
        }
    }
}

/// Everything the board shows for one day.
///
/// Timestamps carry the local offset; their wall-clock reading is local time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayReport {
    pub date: NaiveDate,
    pub location: GeoCoordinate,
    pub hebrew: HebrewSummary,
    /// `None` when the Hebrew year has no reading table; `""` on festival weeks.
    pub parasha: Option<String>,
    pub times: ZmanimSet,
    /// Which candle-lighting key the board highlights.
    pub candle_lighting: ZmanKey,
}

impl DayReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
