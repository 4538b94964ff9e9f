use crate::error::ModelError;

/// Integer id used by the storefront product fixtures
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(id: u32) -> Self {
        ProductId(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            /// Build an id, rejecting empty or whitespace-only values
            pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ModelError::InvalidId(format!(
                        "{} ID cannot be empty",
                        $label
                    )));
                }
                Ok($name(id))
            }

            /// Id for compiled-in fixtures, which are never empty
            pub fn from_static(id: &'static str) -> Self {
                debug_assert!(!id.trim().is_empty(), "empty fixture id");
                $name(id.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::new(s)
            }
        }
    };
}

string_id!(
    /// Listing id for real-estate properties
    PropertyId,
    "Property"
);
string_id!(
    /// Slug id for insurance policies (e.g. `term-life`)
    PolicyId,
    "Policy"
);
string_id!(
    /// Id for catering menu items
    MenuItemId,
    "Menu item"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_ids_are_rejected() {
        assert!(PropertyId::new("").is_err());
        assert!(PolicyId::new("   ").is_err());
        assert_eq!(MenuItemId::new("7").unwrap().as_str(), "7");
    }

    #[test]
    fn product_ids_order_numerically() {
        assert!(ProductId::new(2) < ProductId::new(10));
        assert_eq!(ProductId::from(6).to_string(), "6");
    }
}
