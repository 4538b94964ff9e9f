//! Intentional query crate surface consumed by the CLI and UI clients.

pub use super::builder::CatalogQueryBuilder;
pub use super::filtering::{filter_entities, hash_criteria, matches};
pub use super::sorting::{compare_entities, sort_entities, sort_entities_by};
pub use super::types::{
    CatalogQuery, FilterCriteria, ScalarRange, SortField, SortKey,
    SortKeyPolicy, SortOrder,
};
pub use super::{filter_and_sort, resolve_sort_key, run_query};
