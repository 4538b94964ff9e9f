//! Strategy pattern for composable sorting
//!
//! A strategy reorders a slice in place. Every strategy here is stable:
//! entities whose keys compare equal keep their relative order.

use super::traits::{SortFieldMarker, SortValue};
use super::utils::{is_sorted_by, reorder_by_indices};
use std::marker::PhantomData;
use vitrine_contracts::entity::CatalogEntity;

/// A sorting strategy applied to a result list
pub trait SortStrategy<T>: Send + Sync {
    /// Apply this sorting strategy to the given items
    fn sort(&self, items: &mut [T]);

    /// Field identifier, for logs
    fn field_id(&self) -> &'static str;
}

/// Single field sort strategy
#[derive(Debug, Clone, Copy)]
pub struct FieldSort<T, F> {
    pub field: F,
    pub reverse: bool,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, F> FieldSort<T, F>
where
    T: CatalogEntity,
    F: SortFieldMarker,
{
    /// Create a new field sort strategy
    pub fn new(field: F, reverse: bool) -> Self {
        Self {
            field,
            reverse,
            _phantom: PhantomData,
        }
    }
}

impl<T, F> SortStrategy<T> for FieldSort<T, F>
where
    T: CatalogEntity + Clone,
    F: SortFieldMarker,
{
    fn sort(&self, items: &mut [T]) {
        // Extract keys once for efficiency
        let mut keys: Vec<_> = items
            .iter()
            .enumerate()
            .map(|(i, item)| (i, self.field.extract(item)))
            .collect();

        if is_sorted_by(&keys, |a, b| a.1.compare_with_order(&b.1, self.reverse))
        {
            return;
        }

        // `sort_by` is stable, so ties keep their input order
        keys.sort_by(|a, b| a.1.compare_with_order(&b.1, self.reverse));

        let indices: Vec<_> = keys.into_iter().map(|(i, _)| i).collect();
        reorder_by_indices(items, &indices);
    }

    fn field_id(&self) -> &'static str {
        F::ID
    }
}

/// Multi-field sort with stable sorting
pub struct ChainedSort<'a, T> {
    strategies: Vec<Box<dyn SortStrategy<T> + 'a>>,
}

impl<'a, T> ChainedSort<'a, T> {
    /// Create a new chained sort
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Add a sorting strategy to the chain; earlier strategies take precedence
    pub fn then_by(mut self, strategy: impl SortStrategy<T> + 'a) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Add an already boxed strategy to the chain
    pub fn then_by_boxed(mut self, strategy: Box<dyn SortStrategy<T> + 'a>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl<T> Default for ChainedSort<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for ChainedSort<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<_> = self.strategies.iter().map(|s| s.field_id()).collect();
        f.debug_struct("ChainedSort").field("fields", &fields).finish()
    }
}

impl<T> SortStrategy<T> for ChainedSort<'_, T> {
    fn sort(&self, items: &mut [T]) {
        // Apply strategies in reverse order for stable sorting
        // This ensures primary sort takes precedence
        for strategy in self.strategies.iter().rev() {
            strategy.sort(items);
        }
    }

    fn field_id(&self) -> &'static str {
        self.strategies
            .first()
            .map(|s| s.field_id())
            .unwrap_or("none")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::sorting::fields::{ListingDateField, PriceField, SizeField};
    use chrono::NaiveDate;
    use vitrine_model::{Money, Product, ProductCategory, ProductId};

    fn product(id: u32, price: u64, listed_day: Option<u32>) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("item {id}"),
            price: Money::dollars(price),
            original_price: None,
            category: ProductCategory::Electronics,
            rating: 4.5,
            reviews: 10,
            colors: vec![],
            sizes: vec![],
            description: String::new(),
            features: vec![],
            in_stock: true,
            is_new: false,
            is_sale: false,
            listed_on: listed_day
                .map(|day| NaiveDate::from_ymd_opt(2024, 3, day).unwrap()),
        }
    }

    fn ids(items: &[Product]) -> Vec<u32> {
        items.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn field_sort_is_stable_for_equal_keys() {
        let mut items = vec![
            product(1, 20, None),
            product(2, 10, None),
            product(3, 20, None),
            product(4, 10, None),
        ];
        FieldSort::new(PriceField, false).sort(&mut items);
        assert_eq!(ids(&items), vec![2, 4, 1, 3]);

        FieldSort::new(PriceField, true).sort(&mut items);
        assert_eq!(ids(&items), vec![1, 3, 2, 4]);
    }

    #[test]
    fn undated_entries_trail_in_both_directions() {
        let mut items = vec![
            product(1, 1, None),
            product(2, 1, Some(5)),
            product(3, 1, Some(9)),
        ];
        let strategy = FieldSort::new(ListingDateField, true);
        strategy.sort(&mut items);
        assert_eq!(ids(&items), vec![3, 2, 1]);
        assert_eq!(strategy.field_id(), "listing_date");

        FieldSort::new(ListingDateField, false).sort(&mut items);
        assert_eq!(ids(&items), vec![2, 3, 1]);
    }

    #[test]
    fn chained_sort_breaks_ties_with_secondary_field() {
        let mut items = vec![
            product(1, 20, Some(2)),
            product(2, 10, Some(3)),
            product(3, 20, Some(8)),
        ];
        let chain = ChainedSort::new()
            .then_by(FieldSort::new(PriceField, true))
            .then_by(FieldSort::new(ListingDateField, true));
        chain.sort(&mut items);
        assert_eq!(ids(&items), vec![3, 1, 2]);
        assert_eq!(chain.field_id(), "price");
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn empty_chain_is_a_no_op() {
        let mut items = vec![product(2, 1, None), product(1, 2, None)];
        ChainedSort::<Product>::new().sort(&mut items);
        assert_eq!(ids(&items), vec![2, 1]);

        // Products carry no size, so every key is missing
        FieldSort::new(SizeField, true).sort(&mut items);
        assert_eq!(ids(&items), vec![2, 1]);
    }
}
