use std::fmt;

/// A single-choice filter control: either the "All" sentinel or one value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Selection::All => None,
            Selection::Only(value) => Some(value),
        }
    }

    /// True when the selection places no constraint or equals `value`
    pub fn admits(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Selection::Only(value),
            None => Selection::All,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "All"),
            Selection::Only(value) => write!(f, "{value}"),
        }
    }
}

/// Declares a closed classification enum with display labels, slug parsing
/// and an `all()` listing for filter controls.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => ($label:literal, $slug:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $(
                #[cfg_attr(feature = "serde", serde(rename = $slug))]
                $variant,
            )+
        }

        impl $name {
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn slug(&self) -> &'static str {
                match self {
                    $($name::$variant => $slug,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ModelError;

            /// Accepts either the display label or the slug, case-insensitively
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                $name::all()
                    .iter()
                    .copied()
                    .find(|v| {
                        v.label().eq_ignore_ascii_case(needle)
                            || v.slug().eq_ignore_ascii_case(needle)
                    })
                    .ok_or_else(|| $crate::error::ModelError::UnknownVariant {
                        kind: $kind,
                        value: needle.to_string(),
                    })
            }
        }
    };
}

pub(crate) use labelled_enum;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_admits_everything() {
        let sel: Selection<u8> = Selection::All;
        assert!(sel.admits(&3));
        assert!(sel.is_all());
        assert_eq!(sel.to_string(), "All");
    }

    #[test]
    fn only_admits_equal_value() {
        let sel = Selection::Only("Malibu Beach".to_string());
        assert!(sel.admits(&"Malibu Beach".to_string()));
        assert!(!sel.admits(&"Venice".to_string()));
        assert_eq!(sel.as_option().map(String::as_str), Some("Malibu Beach"));
    }

    #[test]
    fn option_conversion() {
        assert_eq!(Selection::<u8>::from(None), Selection::All);
        assert_eq!(Selection::from(Some(1u8)), Selection::Only(1));
    }
}
