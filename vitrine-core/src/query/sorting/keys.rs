//! Sort key types for comparing catalog entities
//!
//! These wrap the values extracted from entities and handle missing data in
//! their `Ord` implementations: present values come before missing ones.

use super::traits::SortValue;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Optional value that orders present values first
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OptionalKey<T>(Option<T>);

impl<T> OptionalKey<T> {
    pub fn new(value: Option<T>) -> Self {
        OptionalKey(value)
    }

    pub fn value(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

impl<T: Ord> Ord for OptionalKey<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less, // Items with values come first
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl<T: Ord> PartialOrd for OptionalKey<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord + Clone + Send + Sync> SortValue for OptionalKey<T> {
    fn missing() -> Self {
        OptionalKey(None)
    }

    fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}

/// Listing date key for recency sorting
pub type OptionalDateKey = OptionalKey<NaiveDate>;

/// Whole-number key for prices, areas and counts
pub type OptionalU64Key = OptionalKey<u64>;
