//! # Vitrine Core
//!
//! Filter and sort engine behind the Vitrine demo storefronts: a product
//! shop, a luxury real-estate listing site, an insurance policy browser and
//! a catering menu.
//!
//! ## Overview
//!
//! - **Query pipeline**: [`query::filter_and_sort`] narrows a read-only
//!   collection by a [`query::FilterCriteria`] record and orders the
//!   survivors by a [`query::SortKey`]
//! - **Catalogs**: [`catalog::Catalog`] wraps a shared fixture slice and
//!   exposes slider bounds and facet values
//! - **Favorites** and **cart**: value types whose helpers return new values
//! - **Estimates**: coverage needs and monthly payment arithmetic
//! - **Configuration**: default sort key and unknown-key policy
//!
//! ## Feature Flags
//!
//! - `fixtures` (default): the demo catalogs
//!
//! ## Examples
//!
//! ```
//! use vitrine_core::fixtures;
//! use vitrine_core::query::prelude::*;
//! use vitrine_model::PropertyType;
//!
//! let catalog = fixtures::properties();
//! let query = CatalogQueryBuilder::<PropertyType>::new()
//!     .min_bedrooms(4)
//!     .sort_by(SortKey::PriceHigh)
//!     .build();
//!
//! let results = catalog.query(&query);
//! assert_eq!(results[0].title, "Oceanfront Penthouse in Malibu");
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod estimates;
pub mod favorites;
#[cfg(feature = "fixtures")]
pub mod fixtures;
pub mod query;

pub use catalog::Catalog;
pub use config::{ConfigSource, EngineConfig};
pub use error::{CatalogError, Result};
pub use favorites::ToggleSet;
pub use query::{
    CatalogQuery, CatalogQueryBuilder, FilterCriteria, SortKey, SortKeyPolicy,
    filter_and_sort,
};
