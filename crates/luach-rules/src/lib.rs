//! Rule layer for luach: the weekly reading table, Shabbat times composed
//! from Friday and Saturday, and prayer-schedule resolution.

pub mod parasha;
mod parasha_table;
pub mod prayer;
pub mod shabbat;

pub use parasha::{
    Parasha, ParashaLookup, ParashaTable, Reading, Rule, RuleSpan, YearRules, parasha_name,
    resolve_parasha,
};
pub use prayer::{ResolvedPrayer, ResolvedTime, resolve, resolve_record, resolve_schedule};
pub use shabbat::{SHABBAT_END_MINUTES, ShabbatTimes, shabbat_of_week, shabbat_times};
