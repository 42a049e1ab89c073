//! # Luach
//!
//! Halachic prayer times (zmanim) and the weekly Torah reading for a date
//! and location, as shown on a synagogue display board.
//!
//! This crate is a facade that re-exports the `luach` workspace.
//!
//! ## Usage
//!
//! ```rust
//! use luach::prelude::*;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
//! let report = compute_day(date, &GeoCoordinate::jerusalem()).unwrap();
//! println!("{:?} {:?}", report.parasha, report.times.get(ZmanKey::ShabbatCandles22));
//! ```

pub use luach_core::*;
