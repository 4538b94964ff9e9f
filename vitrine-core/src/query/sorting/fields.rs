//! Field marker types for compile-time safe sorting
//!
//! These zero-sized types represent the fields a catalog can be ordered by.

use super::keys::{OptionalDateKey, OptionalU64Key};
use super::traits::SortFieldMarker;
use vitrine_contracts::entity::CatalogEntity;

/// Sort by listing date
#[derive(Copy, Clone, Debug)]
pub struct ListingDateField;

impl SortFieldMarker for ListingDateField {
    type Key = OptionalDateKey;
    const ID: &'static str = "listing_date";

    fn extract<E: CatalogEntity>(&self, entity: &E) -> Self::Key {
        OptionalDateKey::new(entity.listed_on())
    }
}

/// Sort by primary price
#[derive(Copy, Clone, Debug)]
pub struct PriceField;

impl SortFieldMarker for PriceField {
    type Key = OptionalU64Key;
    const ID: &'static str = "price";

    fn extract<E: CatalogEntity>(&self, entity: &E) -> Self::Key {
        OptionalU64Key::new(entity.price().map(|p| p.value()))
    }
}

/// Sort by the secondary size measure
#[derive(Copy, Clone, Debug)]
pub struct SizeField;

impl SortFieldMarker for SizeField {
    type Key = OptionalU64Key;
    const ID: &'static str = "size";

    fn extract<E: CatalogEntity>(&self, entity: &E) -> Self::Key {
        OptionalU64Key::new(entity.size())
    }
}
