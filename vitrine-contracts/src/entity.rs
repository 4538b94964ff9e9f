use crate::attributes::NumericAttribute;
use std::{fmt, hash::Hash, str::FromStr};
use vitrine_model::chrono::NaiveDate;
use vitrine_model::numbers::Money;

// ===== Catalog Entity Contract =====
//
// Every fixture kind (product, property, policy, menu item) is a plain record.
// The engine never matches on the concrete kind; it only reads the accessors
// below. Accessors that do not apply to a kind return `None`, and a `None`
// attribute never satisfies an active constraint on it.

/// Read-only view of one catalog record
pub trait CatalogEntity: Send + Sync {
    type Id: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display + Send + Sync;
    type Category: Copy
        + Eq
        + Hash
        + fmt::Debug
        + fmt::Display
        + FromStr
        + Send
        + Sync
        + 'static;

    /// Stable identifier
    fn id(&self) -> &Self::Id;

    /// The single classification of this record
    fn category(&self) -> Self::Category;

    /// Name or title shown on cards
    fn display_name(&self) -> &str;

    /// Fields consulted by free-text search, display name first
    fn search_fields(&self) -> Vec<&str>;

    /// Labels available to "has feature" filters
    fn tags(&self) -> &[String];

    /// Primary price
    fn price(&self) -> Option<Money>;

    /// Secondary size measure used by `size-*` sorts and size ranges
    fn size(&self) -> Option<u64> {
        None
    }

    fn bedrooms(&self) -> Option<u32> {
        None
    }

    fn bathrooms(&self) -> Option<u32> {
        None
    }

    fn rating(&self) -> Option<f32> {
        None
    }

    /// Recency ordering key
    fn listed_on(&self) -> Option<NaiveDate> {
        None
    }

    /// Neighborhood or area selection, where the kind has one
    fn neighborhood(&self) -> Option<&str> {
        None
    }

    /// Uniform numeric lookup used by range filters
    fn numeric(&self, attribute: NumericAttribute) -> Option<u64> {
        match attribute {
            NumericAttribute::Price => self.price().map(|p| p.value()),
            NumericAttribute::Size => self.size(),
            NumericAttribute::Bedrooms => self.bedrooms().map(u64::from),
            NumericAttribute::Bathrooms => self.bathrooms().map(u64::from),
        }
    }

    /// Case-insensitive tag membership
    fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
