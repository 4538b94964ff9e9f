use vitrine_core::fixtures;
use vitrine_core::query::prelude::*;
use vitrine_core::{CatalogError, ToggleSet};
use vitrine_model::{MenuCategory, PolicyType, ProductCategory, ProductId, PropertyType, Selection};

#[test]
fn electronics_category_keeps_fixture_order() {
    let catalog = fixtures::products();
    let criteria = FilterCriteria {
        category: Selection::Only(ProductCategory::Electronics),
        ..Default::default()
    };

    let names: Vec<&str> = filter_and_sort(catalog.entries(), &criteria, SortKey::Newest)
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Premium Wireless Headphones", "Smart Fitness Watch"]);
}

#[test]
fn coffee_search_finds_only_the_beans() {
    let catalog = fixtures::products();
    let criteria = FilterCriteria {
        search: "coffee".into(),
        ..Default::default()
    };
    let results = filter_and_sort(catalog.entries(), &criteria, SortKey::Newest);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, ProductId::new(6));
}

#[test]
fn properties_by_price_high() {
    let catalog = fixtures::properties();
    let results = filter_and_sort(catalog.entries(), &FilterCriteria::default(), SortKey::PriceHigh);
    assert_eq!(results.len(), 6);
    assert_eq!(results[0].title, "Oceanfront Penthouse in Malibu");
    assert_eq!(results[5].title, "Luxury Condo in Downtown LA");

    let prices: Vec<u64> = results.iter().map(|p| p.price.value()).collect();
    assert_eq!(
        prices,
        vec![12_500_000, 9_200_000, 8_500_000, 6_750_000, 3_450_000, 2_850_000]
    );
}

#[test]
fn properties_by_listing_date() {
    let catalog = fixtures::properties();
    let newest: Vec<&str> = catalog
        .filter_and_sort(&FilterCriteria::default(), SortKey::Newest)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(newest, vec!["4", "6", "2", "5", "3", "1"]);

    let oldest: Vec<&str> = catalog
        .filter_and_sort(&FilterCriteria::default(), SortKey::Oldest)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(oldest, vec!["1", "3", "5", "2", "6", "4"]);
}

#[test]
fn property_thresholds_and_size_sort() {
    let catalog = fixtures::properties();
    let query = CatalogQueryBuilder::new()
        .min_bedrooms(4)
        .min_bathrooms(5)
        .sort_by(SortKey::SizeLarge)
        .build();
    let ids: Vec<&str> = catalog.query(&query).iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "2"]);

    let query = CatalogQueryBuilder::new()
        .category(PropertyType::Townhouse)
        .neighborhood("west hollywood")
        .build();
    assert_eq!(catalog.query(&query).len(), 1);
}

#[test]
fn toggling_a_favorite_twice_restores_membership() {
    let favorites: ToggleSet<ProductId> = [ProductId::new(2)].into_iter().collect();
    let toggled = favorites.toggle(&ProductId::new(5));
    assert!(toggled.contains(&ProductId::new(5)));
    let restored = toggled.toggle(&ProductId::new(5));
    assert_eq!(restored, favorites);
    assert!(restored.contains(&ProductId::new(2)));
}

#[test]
fn unknown_sort_key_policy() {
    let err = resolve_sort_key("most-popular", SortKeyPolicy::Strict).unwrap_err();
    assert!(matches!(err, CatalogError::UnrecognizedSortKey(_)));
    assert_eq!(
        resolve_sort_key("most-popular", SortKeyPolicy::Fallback).unwrap(),
        SortKey::Newest
    );
}

#[test]
fn policies_have_no_price_but_a_coverage_size() {
    let catalog = fixtures::policies();
    assert!(catalog.price_bounds().is_none());

    let priced = FilterCriteria {
        price: Some(ScalarRange::new(0, u64::MAX)),
        ..Default::default()
    };
    assert!(filter_and_sort(catalog.entries(), &priced, SortKey::PriceLow).is_empty());

    let ids: Vec<&str> = filter_and_sort(catalog.entries(), &FilterCriteria::default(), SortKey::SizeLarge)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, vec!["variable-life", "term-life", "universal-life", "whole-life"]);

    let query = CatalogQueryBuilder::new().category(PolicyType::Whole).build();
    assert_eq!(catalog.query(&query).len(), 1);
}

#[test]
fn covering_range_is_inactive_on_catalog_query() {
    let catalog = fixtures::properties();
    let bounds = catalog.price_bounds().unwrap();
    assert_eq!(bounds, ScalarRange::new(2_850_000, 12_500_000));

    let query = CatalogQueryBuilder::new()
        .price_range(0, 20_000_000)
        .sort_by(SortKey::PriceLow)
        .build();
    assert_eq!(catalog.query(&query).len(), 6);

    let query = CatalogQueryBuilder::<PropertyType>::new()
        .price_range(3_000_000, 9_000_000)
        .build();
    let ids: Vec<&str> = catalog.query(&query).iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["6", "3", "1"]);
}

#[test]
fn menu_dietary_tags_and_search() {
    let catalog = fixtures::menu();
    let query = CatalogQueryBuilder::new()
        .require_tag("gluten-free")
        .category(MenuCategory::MainCourses)
        .sort_by(SortKey::PriceLow)
        .build();
    let names: Vec<&str> = catalog.query(&query).iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Vegan Tasting Plate", "Lobster Thermidor", "Wagyu Beef Tenderloin"]);

    let query = CatalogQueryBuilder::<MenuCategory>::new().search("cream").build();
    let names: Vec<&str> = catalog.query(&query).iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Truffle Risotto", "Lobster Thermidor", "Chocolate Soufflé"]);
}

#[test]
fn facets_for_filter_controls() {
    let catalog = fixtures::properties();
    assert_eq!(catalog.neighborhoods().len(), 6);
    assert_eq!(catalog.categories().len(), 6);
    assert!(catalog.all_tags().contains("Infinity Pool"));
    assert_eq!(catalog.size_bounds(), Some(ScalarRange::new(2_400, 7_500)));

    let products = fixtures::products();
    assert_eq!(
        products.categories(),
        vec![
            ProductCategory::Electronics,
            ProductCategory::Fashion,
            ProductCategory::Beauty,
            ProductCategory::Food
        ]
    );
}

#[test]
fn neighborhood_and_search_criteria_hash_apart() {
    let catalog = fixtures::properties();
    let by_neighborhood = FilterCriteria {
        neighborhood: Selection::Only("malibu".to_string()),
        ..Default::default()
    };
    let by_search = FilterCriteria::<PropertyType> {
        search: "malibu".into(),
        ..Default::default()
    };

    let hood = filter_and_sort(catalog.entries(), &by_neighborhood, SortKey::Newest);
    let search = filter_and_sort(catalog.entries(), &by_search, SortKey::Newest);
    assert!(hood.is_empty());
    assert!(!search.is_empty());
    assert_ne!(
        hash_criteria(&by_neighborhood, SortKey::Newest),
        hash_criteria(&by_search, SortKey::Newest)
    );
}
