use super::types::*;
use vitrine_model::Selection;

/// Fluent API for building catalog queries
#[derive(Debug, Clone)]
pub struct CatalogQueryBuilder<C> {
    query: CatalogQuery<C>,
}

impl<C> CatalogQueryBuilder<C> {
    /// Create a new query builder
    pub fn new() -> Self {
        Self {
            query: CatalogQuery::default(),
        }
    }

    // === Filter methods ===

    /// Restrict results to one category
    pub fn category(mut self, category: C) -> Self {
        self.query.criteria.category = Selection::Only(category);
        self
    }

    /// Set an inclusive price range in whole dollars
    pub fn price_range(mut self, min: u64, max: u64) -> Self {
        self.query.criteria.price = Some(ScalarRange::new(min, max));
        self
    }

    /// Set an inclusive range over the secondary size measure
    pub fn size_range(mut self, min: u64, max: u64) -> Self {
        self.query.criteria.size = Some(ScalarRange::new(min, max));
        self
    }

    /// Require at least this many bedrooms
    pub fn min_bedrooms(mut self, bedrooms: u32) -> Self {
        self.query.criteria.min_bedrooms = Some(bedrooms);
        self
    }

    /// Require at least this many bathrooms
    pub fn min_bathrooms(mut self, bathrooms: u32) -> Self {
        self.query.criteria.min_bathrooms = Some(bathrooms);
        self
    }

    pub fn neighborhood(mut self, neighborhood: impl Into<String>) -> Self {
        self.query.criteria.neighborhood = Selection::Only(neighborhood.into());
        self
    }

    /// Set search query
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.query.criteria.search = text.into();
        self
    }

    /// Require a tag; may be called repeatedly
    pub fn require_tag(mut self, tag: impl Into<String>) -> Self {
        self.query.criteria.required_tags.insert(tag.into());
        self
    }

    // === Sort methods ===

    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.query.sort = key;
        self
    }

    /// Build the final query
    pub fn build(self) -> CatalogQuery<C> {
        self.query
    }
}

impl<C> Default for CatalogQueryBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_model::PropertyType;

    #[test]
    fn builder_sets_every_dimension() {
        let query = CatalogQueryBuilder::new()
            .category(PropertyType::Villa)
            .price_range(1_000_000, 9_000_000)
            .size_range(3_000, 8_000)
            .min_bedrooms(4)
            .min_bathrooms(3)
            .neighborhood("Hollywood Hills")
            .search("view")
            .require_tag("Pool")
            .require_tag("Pool")
            .sort_by(SortKey::PriceHigh)
            .build();

        assert_eq!(query.criteria.category, Selection::Only(PropertyType::Villa));
        assert_eq!(query.criteria.price, Some(ScalarRange::new(1_000_000, 9_000_000)));
        assert_eq!(query.criteria.required_tags.len(), 1);
        assert_eq!(query.criteria.active_count(), 8);
        assert_eq!(query.sort, SortKey::PriceHigh);
    }

    #[test]
    fn empty_builder_is_default_query() {
        let query = CatalogQueryBuilder::<PropertyType>::default().build();
        assert_eq!(query, CatalogQuery::default());
    }
}
