//! Query pipeline: filter, then sort.

pub mod builder;
pub mod filtering;
pub mod prelude;
pub mod sorting;
pub mod types;

pub use builder::CatalogQueryBuilder;
pub use filtering::{Rejection, filter_entities, hash_criteria, matches};
pub use sorting::{compare_entities, sort_entities, sort_entities_by};
pub use types::*;

use crate::error::{CatalogError, Result};
use tracing::{debug, warn};
use vitrine_contracts::entity::CatalogEntity;

/// Filter a collection, then order the survivors by `sort_key`.
///
/// The result borrows from `entities` and never contains anything absent
/// from it. Degenerate criteria give an empty `Vec`, not an error.
pub fn filter_and_sort<'a, E: CatalogEntity>(
    entities: &'a [E],
    criteria: &FilterCriteria<E::Category>,
    sort_key: SortKey,
) -> Vec<&'a E> {
    let filtered = filter_entities(entities, criteria);
    let sorted = sort_entities(&filtered, sort_key);
    debug!(
        input = entities.len(),
        output = sorted.len(),
        sort = %sort_key,
        "filter_and_sort complete"
    );
    sorted
}

/// Run a bundled query
pub fn run_query<'a, E: CatalogEntity>(
    entities: &'a [E],
    query: &CatalogQuery<E::Category>,
) -> Vec<&'a E> {
    filter_and_sort(entities, &query.criteria, query.sort)
}

/// Parse a user-supplied sort key string under the given policy.
///
/// `Strict` surfaces [`CatalogError::UnrecognizedSortKey`]; `Fallback` logs a
/// warning and returns [`SortKey::Newest`].
pub fn resolve_sort_key(raw: &str, policy: SortKeyPolicy) -> Result<SortKey> {
    match raw.parse::<SortKey>() {
        Ok(key) => Ok(key),
        Err(CatalogError::UnrecognizedSortKey(value)) => match policy {
            SortKeyPolicy::Strict => Err(CatalogError::UnrecognizedSortKey(value)),
            SortKeyPolicy::Fallback => {
                warn!(
                    requested = %value,
                    fallback = %SortKey::Newest,
                    "unrecognized sort key, falling back"
                );
                Ok(SortKey::Newest)
            }
        },
        Err(other) => Err(other),
    }
}
