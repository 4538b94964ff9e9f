//! Core catalog data model definitions shared across Vitrine crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod error;
pub mod filter_types;
pub mod ids;
pub mod menu;
pub mod numbers;
pub mod policy;
pub mod prelude;
pub mod product;
pub mod property;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use filter_types::Selection;
pub use ids::{MenuItemId, PolicyId, ProductId, PropertyId};
pub use menu::{MenuCategory, MenuItem};
pub use numbers::{Money, SquareFeet};
pub use policy::{AgeRange, Flexibility, Policy, PolicyType};
pub use product::{Product, ProductCategory};
pub use property::{Address, ListingStatus, Property, PropertySpecs, PropertyType};
