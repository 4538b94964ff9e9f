use super::fields::{ListingDateField, PriceField, SizeField};
use super::strategy::{ChainedSort, FieldSort, SortStrategy};
use super::traits::{SortFieldMarker, SortValue};
use crate::query::types::{SortField, SortKey};
use std::cmp::Ordering;
use tracing::trace;
use vitrine_contracts::entity::CatalogEntity;

fn compare_field<E, F>(a: &E, b: &E, field: F, reverse: bool) -> Ordering
where
    E: CatalogEntity,
    F: SortFieldMarker,
{
    field
        .extract(a)
        .compare_with_order(&field.extract(b), reverse)
}

/// Compare two entities under the given sort key.
///
/// Entities missing the sort attribute compare greater than any entity that
/// has it, regardless of direction.
pub fn compare_entities<E: CatalogEntity>(a: &E, b: &E, key: SortKey) -> Ordering {
    let reverse = key.order().is_descending();
    match key.field() {
        SortField::ListingDate => compare_field(a, b, ListingDateField, reverse),
        SortField::Price => compare_field(a, b, PriceField, reverse),
        SortField::Size => compare_field(a, b, SizeField, reverse),
    }
}

/// Build the strategy implementing a sort key
pub fn strategy_for<'a, T>(key: SortKey) -> Box<dyn SortStrategy<T> + 'a>
where
    T: CatalogEntity + Clone + 'a,
{
    let reverse = key.order().is_descending();
    match key.field() {
        SortField::ListingDate => {
            Box::new(FieldSort::<T, _>::new(ListingDateField, reverse))
        }
        SortField::Price => Box::new(FieldSort::<T, _>::new(PriceField, reverse)),
        SortField::Size => Box::new(FieldSort::<T, _>::new(SizeField, reverse)),
    }
}

/// Return a new, stably sorted sequence. The input is left untouched.
pub fn sort_entities<T>(items: &[T], key: SortKey) -> Vec<T>
where
    T: CatalogEntity + Clone,
{
    let mut sorted = items.to_vec();
    let strategy = strategy_for::<T>(key);
    trace!(
        field = strategy.field_id(),
        key = %key,
        count = sorted.len(),
        "sorting entities"
    );
    strategy.sort(&mut sorted);
    sorted
}

/// Sort by several keys; the first key is primary and later keys break ties.
pub fn sort_entities_by<T>(items: &[T], keys: &[SortKey]) -> Vec<T>
where
    T: CatalogEntity + Clone,
{
    let chain = keys
        .iter()
        .fold(ChainedSort::new(), |chain, key| {
            chain.then_by_boxed(strategy_for::<T>(*key))
        });
    let mut sorted = items.to_vec();
    trace!(?chain, count = sorted.len(), "sorting entities by chain");
    chain.sort(&mut sorted);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::sorting::utils::is_sorted_by;
    use chrono::NaiveDate;
    use vitrine_model::{
        Address, ListingStatus, Money, Property, PropertyId, PropertySpecs,
        PropertyType, SquareFeet,
    };

    fn listing(id: &'static str, price: u64, sqft: u32, day: u32) -> Property {
        Property {
            id: PropertyId::from_static(id),
            title: format!("Listing {id}"),
            kind: PropertyType::House,
            price: Money::dollars(price),
            address: Address {
                street: "1 Main St".into(),
                city: "Los Angeles".into(),
                state: "CA".into(),
                zip_code: "90001".into(),
                neighborhood: "Downtown".into(),
            },
            specs: PropertySpecs {
                bedrooms: 3,
                bathrooms: 2,
                sqft: SquareFeet::new(sqft),
                lot_size: None,
                year_built: 2000,
                parking: 1,
            },
            description: String::new(),
            features: vec![],
            amenities: vec![],
            status: ListingStatus::ForSale,
            listed_on: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            days_on_market: 0,
            is_new: false,
            is_premium: false,
        }
    }

    fn ids(items: &[Property]) -> Vec<&str> {
        items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn sort_returns_new_sequence_and_leaves_input_alone() {
        let input = vec![
            listing("a", 300, 10, 1),
            listing("b", 100, 30, 3),
            listing("c", 200, 20, 2),
        ];
        let sorted = sort_entities(&input, SortKey::PriceLow);
        assert_eq!(ids(&sorted), vec!["b", "c", "a"]);
        assert_eq!(ids(&input), vec!["a", "b", "c"]);
    }

    #[test]
    fn every_key_produces_its_ordering() {
        let input = vec![
            listing("a", 300, 10, 1),
            listing("b", 100, 30, 3),
            listing("c", 200, 20, 2),
        ];
        assert_eq!(ids(&sort_entities(&input, SortKey::Newest)), vec!["b", "c", "a"]);
        assert_eq!(ids(&sort_entities(&input, SortKey::Oldest)), vec!["a", "c", "b"]);
        assert_eq!(ids(&sort_entities(&input, SortKey::PriceHigh)), vec!["a", "c", "b"]);
        assert_eq!(ids(&sort_entities(&input, SortKey::SizeLarge)), vec!["b", "c", "a"]);
        assert_eq!(ids(&sort_entities(&input, SortKey::SizeSmall)), vec!["a", "c", "b"]);

        for key in SortKey::all() {
            let sorted = sort_entities(&input, *key);
            assert!(is_sorted_by(&sorted, |a, b| compare_entities(a, b, *key)));
        }
    }

    #[test]
    fn works_over_borrowed_entities() {
        let owned = vec![listing("a", 2, 1, 1), listing("b", 1, 1, 1)];
        let borrowed: Vec<&Property> = owned.iter().collect();
        let sorted = sort_entities(&borrowed, SortKey::PriceLow);
        assert_eq!(sorted[0].id.as_str(), "b");
    }

    #[test]
    fn chained_keys_break_ties() {
        let input = vec![
            listing("a", 100, 10, 1),
            listing("b", 100, 30, 3),
            listing("c", 50, 20, 2),
        ];
        let sorted = sort_entities_by(&input, &[SortKey::PriceHigh, SortKey::SizeSmall]);
        assert_eq!(ids(&sorted), vec!["a", "b", "c"]);
        let sorted = sort_entities_by(&input, &[SortKey::PriceHigh, SortKey::SizeLarge]);
        assert_eq!(ids(&sorted), vec!["b", "a", "c"]);
        assert_eq!(ids(&sort_entities_by(&input, &[])), vec!["a", "b", "c"]);
    }
}
