use crate::filter_types::labelled_enum;
use crate::ids::PolicyId;
use crate::numbers::Money;

labelled_enum! {
    /// Life insurance product families
    PolicyType, "policy type" {
        Term => ("Term", "term"),
        Whole => ("Whole", "whole"),
        Universal => ("Universal", "universal"),
        Variable => ("Variable", "variable"),
    }
}

labelled_enum! {
    Flexibility, "flexibility" {
        Low => ("Low", "low"),
        Medium => ("Medium", "medium"),
        High => ("High", "high"),
    }
}

/// Inclusive issue-age window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

impl AgeRange {
    pub fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, age: u8) -> bool {
        (self.min..=self.max).contains(&age)
    }
}

impl std::fmt::Display for AgeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Insurance policy overview card
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Policy {
    pub id: PolicyId,
    pub name: String,
    pub kind: PolicyType,
    pub description: String,
    pub features: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub age_range: AgeRange,
    pub coverage_min: Money,
    pub coverage_max: Money,
    pub premium_structure: String,
    pub flexibility: Flexibility,
    pub cash_value: bool,
    pub investment_options: bool,
    pub popular: bool,
    pub recommended: bool,
}

impl Policy {
    /// Whether the requested face amount is within the policy's coverage band
    pub fn covers(&self, amount: Money) -> bool {
        amount >= self.coverage_min && amount <= self.coverage_max
    }

    pub fn is_featured(&self) -> bool {
        self.popular || self.recommended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_range_is_inclusive() {
        let range = AgeRange::new(18, 75);
        assert!(range.contains(18));
        assert!(range.contains(75));
        assert!(!range.contains(76));
        assert_eq!(range.to_string(), "18-75");
    }
}
