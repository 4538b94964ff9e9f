//! UI focused snapshot of the model surface.
//! Prefer importing from this module when wiring presentation layers.

pub use super::filter_types::Selection;
pub use super::ids::{MenuItemId, PolicyId, ProductId, PropertyId};
pub use super::menu::{MenuCategory, MenuItem};
pub use super::numbers::{Money, SquareFeet};
pub use super::policy::{AgeRange, Flexibility, Policy, PolicyType};
pub use super::product::{Product, ProductCategory};
pub use super::property::{
    Address, ListingStatus, Property, PropertySpecs, PropertyType,
};
