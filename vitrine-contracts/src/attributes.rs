use std::fmt;

/// Numeric dimensions a catalog record may expose to range and threshold
/// filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericAttribute {
    /// Primary price in whole dollars
    Price,
    /// Secondary size measure: square footage, maximum coverage, servings
    Size,
    Bedrooms,
    Bathrooms,
}

impl NumericAttribute {
    pub fn all() -> &'static [NumericAttribute] {
        use NumericAttribute::*;
        &[Price, Size, Bedrooms, Bathrooms]
    }

    pub fn label(&self) -> &'static str {
        match self {
            NumericAttribute::Price => "price",
            NumericAttribute::Size => "size",
            NumericAttribute::Bedrooms => "bedrooms",
            NumericAttribute::Bathrooms => "bathrooms",
        }
    }
}

impl fmt::Display for NumericAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
