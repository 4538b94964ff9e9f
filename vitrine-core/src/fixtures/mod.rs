//! Demo catalogs compiled into the crate.
//!
//! Each catalog is built on first use and shared behind an `Arc`; every
//! accessor hands out a cheap clone of the same handle.

mod menu;
mod policies;
mod products;
mod properties;

pub use menu::menu;
pub use policies::policies;
pub use products::products;
pub use properties::properties;

use chrono::NaiveDate;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    let parsed = NaiveDate::from_ymd_opt(year, month, day);
    debug_assert!(parsed.is_some(), "invalid fixture date");
    parsed.unwrap_or(NaiveDate::MIN)
}
