//! Shared, read-only catalog handles.

use crate::query::{
    CatalogQuery, FilterCriteria, ScalarRange, SortKey, filter_and_sort,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use vitrine_contracts::attributes::NumericAttribute;
use vitrine_contracts::entity::CatalogEntity;

/// A named, immutable collection of entities shared behind an `Arc`.
///
/// Cloning a catalog clones the handle, not the entries.
#[derive(Debug)]
pub struct Catalog<E> {
    name: &'static str,
    entries: Arc<[E]>,
}

impl<E> Clone for Catalog<E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<E: CatalogEntity> Catalog<E> {
    pub fn new(name: &'static str, entries: impl Into<Arc<[E]>>) -> Self {
        Self {
            name,
            entries: entries.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: &E::Id) -> Option<&E> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Run a query against the catalog.
    ///
    /// Ranges that span the catalog's full extent are inactive and are
    /// dropped before filtering, so a slider left at its end stops also
    /// admits entries that lack the attribute.
    pub fn query(&self, query: &CatalogQuery<E::Category>) -> Vec<&E> {
        let criteria = self.relax_covering_ranges(&query.criteria);
        filter_and_sort(self.entries(), &criteria, query.sort)
    }

    /// Convenience for callers holding criteria and a key separately
    pub fn filter_and_sort(
        &self,
        criteria: &FilterCriteria<E::Category>,
        sort: SortKey,
    ) -> Vec<&E> {
        let criteria = self.relax_covering_ranges(criteria);
        filter_and_sort(self.entries(), &criteria, sort)
    }

    fn relax_covering_ranges(
        &self,
        criteria: &FilterCriteria<E::Category>,
    ) -> FilterCriteria<E::Category> {
        let mut relaxed = criteria.clone();
        if covers(relaxed.price.as_ref(), self.price_bounds()) {
            relaxed.price = None;
        }
        if covers(relaxed.size.as_ref(), self.size_bounds()) {
            relaxed.size = None;
        }
        relaxed
    }

    fn bounds(&self, attribute: NumericAttribute) -> Option<ScalarRange<u64>> {
        let mut values = self.entries.iter().filter_map(|e| e.numeric(attribute));
        let first = values.next()?;
        let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(ScalarRange::new(min, max))
    }

    /// Fixture-wide price extent, `None` when no entry has a price
    pub fn price_bounds(&self) -> Option<ScalarRange<u64>> {
        self.bounds(NumericAttribute::Price)
    }

    /// Fixture-wide size extent, `None` when no entry has a size
    pub fn size_bounds(&self) -> Option<ScalarRange<u64>> {
        self.bounds(NumericAttribute::Size)
    }

    /// Categories present in the catalog, in first-seen order
    pub fn categories(&self) -> Vec<E::Category> {
        let mut seen = Vec::new();
        for entry in self.entries.iter() {
            let category = entry.category();
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// Every tag used by any entry, sorted
    pub fn all_tags(&self) -> BTreeSet<String> {
        self.entries
            .iter()
            .flat_map(|e| e.tags().iter().cloned())
            .collect()
    }

    /// Distinct neighborhoods, sorted
    pub fn neighborhoods(&self) -> BTreeSet<String> {
        self.entries
            .iter()
            .filter_map(|e| e.neighborhood().map(str::to_string))
            .collect()
    }
}

// With no bounds (no entry has the attribute) the range stays active.
fn covers(range: Option<&ScalarRange<u64>>, bounds: Option<ScalarRange<u64>>) -> bool {
    match (range, bounds) {
        (Some(range), Some(bounds)) => range.covers(&bounds),
        _ => false,
    }
}
