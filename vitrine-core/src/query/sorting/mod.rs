//! Sorting module for the catalog result lists
//!
//! This module provides:
//! - Field marker types that extract typed sort keys from any catalog entity
//! - Sort key wrappers that push missing data to the end
//! - Strategy pattern for composable, stable sorting
//! - The `SortKey`-driven entry points used by the query pipeline

pub mod fields;
pub mod keys;
pub mod simple;
pub mod strategy;
pub mod traits;
pub mod utils;

pub use fields::*;
pub use keys::*;
pub use simple::{compare_entities, sort_entities, sort_entities_by, strategy_for};
pub use strategy::*;
pub use traits::*;
