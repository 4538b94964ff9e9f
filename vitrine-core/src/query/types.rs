use crate::error::CatalogError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use vitrine_model::Selection;

/// Query structure shared by every demo catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "C: Serialize",
    deserialize = "C: Deserialize<'de>"
))]
pub struct CatalogQuery<C> {
    #[serde(default)]
    pub criteria: FilterCriteria<C>,
    #[serde(default)]
    pub sort: SortKey,
}

impl<C> Default for CatalogQuery<C> {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort: SortKey::default(),
        }
    }
}

/// User-editable filter state. Each field's default is its "no constraint"
/// sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    default,
    bound(serialize = "C: Serialize", deserialize = "C: Deserialize<'de>")
)]
pub struct FilterCriteria<C> {
    pub category: Selection<C>,
    /// Inclusive price range in whole dollars
    pub price: Option<ScalarRange<u64>>,
    /// Inclusive range over the secondary size measure
    pub size: Option<ScalarRange<u64>>,
    /// "At least N" bedrooms; zero means any
    pub min_bedrooms: Option<u32>,
    /// "At least N" bathrooms; zero means any
    pub min_bathrooms: Option<u32>,
    pub neighborhood: Selection<String>,
    /// Free-text query; blank means any
    pub search: String,
    /// Every listed tag must be present on the entity
    pub required_tags: BTreeSet<String>,
}

impl<C> Default for FilterCriteria<C> {
    fn default() -> Self {
        Self {
            category: Selection::All,
            price: None,
            size: None,
            min_bedrooms: None,
            min_bathrooms: None,
            neighborhood: Selection::All,
            search: String::new(),
            required_tags: BTreeSet::new(),
        }
    }
}

impl<C> FilterCriteria<C> {
    /// Trimmed, lowercased search text, or `None` when the box is blank
    pub fn normalized_search(&self) -> Option<String> {
        let trimmed = self.search.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    /// Number of constraints that are not at their sentinel value
    pub fn active_count(&self) -> usize {
        [
            !self.category.is_all(),
            self.price.is_some(),
            self.size.is_some(),
            self.min_bedrooms.is_some_and(|n| n > 0),
            self.min_bathrooms.is_some_and(|n| n > 0),
            !self.neighborhood.is_all(),
            self.normalized_search().is_some(),
            !self.required_tags.is_empty(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active_count() == 0
    }
}

/// Inclusive range for scalar filters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ScalarRange<T> {
    pub min: T,
    pub max: T,
}

impl<T> ScalarRange<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: PartialOrd> ScalarRange<T> {
    /// Inclusive on both ends; an inverted range contains nothing
    pub fn contains(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    /// True when this range admits every value in `bounds`
    pub fn covers(&self, bounds: &ScalarRange<T>) -> bool {
        self.min <= bounds.min && self.max >= bounds.max
    }
}

/// Field an ordering rule reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    ListingDate,
    Price,
    Size,
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn is_descending(&self) -> bool {
        matches!(self, SortOrder::Descending)
    }
}

/// The closed set of orderings the demo result lists offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    PriceLow,
    PriceHigh,
    SizeLarge,
    SizeSmall,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        use SortKey::*;
        &[Newest, Oldest, PriceLow, PriceHigh, SizeLarge, SizeSmall]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::SizeLarge => "size-large",
            SortKey::SizeSmall => "size-small",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest First",
            SortKey::Oldest => "Oldest First",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::SizeLarge => "Size: Largest First",
            SortKey::SizeSmall => "Size: Smallest First",
        }
    }

    pub fn field(&self) -> SortField {
        match self {
            SortKey::Newest | SortKey::Oldest => SortField::ListingDate,
            SortKey::PriceLow | SortKey::PriceHigh => SortField::Price,
            SortKey::SizeLarge | SortKey::SizeSmall => SortField::Size,
        }
    }

    pub fn order(&self) -> SortOrder {
        match self {
            SortKey::Oldest | SortKey::PriceLow | SortKey::SizeSmall => {
                SortOrder::Ascending
            }
            SortKey::Newest | SortKey::PriceHigh | SortKey::SizeLarge => {
                SortOrder::Descending
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            "size-large" | "sqft-large" => Ok(SortKey::SizeLarge),
            "size-small" | "sqft-small" => Ok(SortKey::SizeSmall),
            _ => Err(CatalogError::UnrecognizedSortKey(s.to_string())),
        }
    }
}

impl Serialize for SortKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}

/// What to do with a sort key string outside [`SortKey::all`]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortKeyPolicy {
    /// Surface the error to the caller
    Strict,
    /// Log and fall back to [`SortKey::Newest`]
    #[default]
    Fallback,
}

impl FromStr for SortKeyPolicy {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(SortKeyPolicy::Strict),
            "fallback" => Ok(SortKeyPolicy::Fallback),
            other => Err(CatalogError::Config(format!(
                "unknown sort key policy '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_model::ProductCategory;

    #[test]
    fn sort_keys_round_trip_through_strings() {
        for key in SortKey::all() {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), *key);
        }
        assert_eq!("sqft-large".parse::<SortKey>().unwrap(), SortKey::SizeLarge);
        assert_eq!(" Price-High ".parse::<SortKey>().unwrap(), SortKey::PriceHigh);
    }

    #[test]
    fn unknown_sort_key_is_an_error() {
        let err = "cheapest".parse::<SortKey>().unwrap_err();
        assert!(matches!(err, CatalogError::UnrecognizedSortKey(ref s) if s == "cheapest"));
    }

    #[test]
    fn sort_key_serde_uses_kebab_case() {
        let json = serde_json::to_string(&SortKey::PriceHigh).unwrap();
        assert_eq!(json, "\"price-high\"");
        let parsed: SortKey = serde_json::from_str("\"sqft-small\"").unwrap();
        assert_eq!(parsed, SortKey::SizeSmall);
        // Same normalization as the string parser
        let parsed: SortKey = serde_json::from_str("\" Price-High \"").unwrap();
        assert_eq!(parsed, SortKey::PriceHigh);
        assert!(serde_json::from_str::<SortKey>("\"popular\"").is_err());
    }

    #[test]
    fn default_criteria_are_unconstrained() {
        let criteria = FilterCriteria::<ProductCategory>::default();
        assert!(criteria.is_unconstrained());

        let criteria = FilterCriteria::<ProductCategory> {
            search: "   ".into(),
            min_bedrooms: Some(0),
            ..Default::default()
        };
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn criteria_deserialize_with_missing_fields() {
        let criteria: FilterCriteria<ProductCategory> = serde_json::from_str(
            r#"{ "category": { "only": "electronics" }, "search": "watch" }"#,
        )
        .unwrap();
        assert_eq!(criteria.category, Selection::Only(ProductCategory::Electronics));
        assert_eq!(criteria.active_count(), 2);
    }

    #[test]
    fn ranges_are_inclusive_and_inverted_ranges_are_empty() {
        let range = ScalarRange::new(10u64, 20);
        assert!(range.contains(&10));
        assert!(range.contains(&20));
        assert!(!range.contains(&21));

        let inverted = ScalarRange::new(20u64, 10);
        assert!(inverted.is_inverted());
        assert!(!inverted.contains(&15));
    }
}
