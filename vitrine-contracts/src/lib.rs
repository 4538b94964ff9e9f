//! Trait surfaces that describe how the filter/sort engine reads Vitrine
//! catalog records.

pub mod attributes;
pub mod entity;
mod impls;

/// Frequently used trait combinators for UI and engine crates.
pub mod prelude {
    pub use super::attributes::NumericAttribute;
    pub use super::entity::CatalogEntity;
}
