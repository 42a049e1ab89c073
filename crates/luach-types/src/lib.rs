//! Core types for the luach zmanim engine.

pub mod error;
pub mod geo;
pub mod prayer;
pub mod zmanim;

pub use error::LuachError;
pub use geo::GeoCoordinate;
pub use prayer::{PrayerEntry, PrayerRecord};
pub use zmanim::{CandleOffset, UnknownZmanKey, ZmanKey, ZmanimSet};
