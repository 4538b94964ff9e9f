//! Core traits for sortable catalog fields
//!
//! Field markers are zero-sized types; each one names the key type it
//! produces so comparisons stay fully typed.

use std::cmp::Ordering;
use vitrine_contracts::entity::CatalogEntity;

/// Individual sort field with associated key type
pub trait SortFieldMarker: Copy + Clone + Send + Sync + 'static {
    /// The type of key extracted for this field
    type Key: SortValue;

    /// Unique identifier for this field, used in logs
    const ID: &'static str;

    /// Read this field's key from an entity
    fn extract<E: CatalogEntity>(&self, entity: &E) -> Self::Key;
}

/// Keys that can be compared for sorting
///
/// All sort keys must be comparable and handle missing data gracefully.
pub trait SortValue: Ord + Clone + Send + Sync {
    /// Create a key representing missing/null data
    fn missing() -> Self;

    /// Check if this key represents missing data
    fn is_missing(&self) -> bool;

    /// Compare two keys while ensuring missing values always sort last
    #[inline]
    fn compare_with_order(&self, other: &Self, reverse: bool) -> Ordering {
        match (self.is_missing(), other.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                if reverse {
                    other.cmp(self)
                } else {
                    self.cmp(other)
                }
            }
        }
    }
}
