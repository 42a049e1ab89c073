//! Astronomy for luach.
//!
//! A low-precision solar position model (J2000.0 mean elements, fixed
//! obliquity), the hour-angle offsets derived from it, and the composition
//! of those offsets into a day's set of zmanim.

pub mod offset;
pub mod solar;
pub mod zmanim;

pub use offset::{midday_offset, offset_of_angle};
pub use solar::{SolarPosition, solar_position};
pub use zmanim::{HourSystem, SolarDay, derive_zmanim, local_midnight, solar_day};

pub(crate) fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

pub(crate) fn cos_deg(x: f64) -> f64 {
    x.to_radians().cos()
}
