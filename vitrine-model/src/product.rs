use crate::filter_types::labelled_enum;
use crate::ids::ProductId;
use crate::numbers::Money;
use chrono::NaiveDate;

labelled_enum! {
    /// Storefront departments
    ProductCategory, "product category" {
        Electronics => ("Electronics", "electronics"),
        Fashion => ("Fashion", "fashion"),
        Beauty => ("Beauty", "beauty"),
        Food => ("Food", "food"),
    }
}

/// Storefront product card
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub original_price: Option<Money>,
    pub category: ProductCategory,
    pub rating: f32,
    pub reviews: u32,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
    pub in_stock: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_new: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_sale: bool,
    /// Products carry no listing date in the storefront fixtures
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub listed_on: Option<NaiveDate>,
}

impl Product {
    /// First color option, used when the shopper has not picked one
    pub fn default_color(&self) -> Option<&str> {
        self.colors.first().map(String::as_str)
    }

    /// First size option, used when the shopper has not picked one
    pub fn default_size(&self) -> Option<&str> {
        self.sizes.first().map(String::as_str)
    }

    pub fn discount(&self) -> Option<Money> {
        self.original_price
            .filter(|orig| *orig > self.price)
            .map(|orig| orig.saturating_sub(self.price))
    }
}
