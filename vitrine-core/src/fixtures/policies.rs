use super::strings;
use crate::catalog::Catalog;
use once_cell::sync::Lazy;
use std::sync::Arc;
use vitrine_model::{AgeRange, Flexibility, Money, Policy, PolicyId, PolicyType};

static POLICIES: Lazy<Arc<[Policy]>> = Lazy::new(|| {
    vec![
        Policy {
            id: PolicyId::from_static("term-life"),
            name: "Term Life Insurance".into(),
            kind: PolicyType::Term,
            description: "Affordable coverage for a specific period, ideal for temporary needs like mortgage protection or income replacement.".into(),
            features: strings(&["Fixed premiums", "Level death benefit", "Convertible options", "Renewable terms"]),
            pros: strings(&["Lowest cost", "Simple structure", "High coverage amounts", "Flexible terms"]),
            cons: strings(&["No cash value", "Temporary coverage", "Premiums increase with age"]),
            age_range: AgeRange::new(18, 75),
            coverage_min: Money::dollars(50_000),
            coverage_max: Money::dollars(10_000_000),
            premium_structure: "Level for term period".into(),
            flexibility: Flexibility::Medium,
            cash_value: false,
            investment_options: false,
            popular: true,
            recommended: false,
        },
        Policy {
            id: PolicyId::from_static("whole-life"),
            name: "Whole Life Insurance".into(),
            kind: PolicyType::Whole,
            description: "Permanent coverage with guaranteed cash value growth, providing lifelong protection and savings.".into(),
            features: strings(&["Guaranteed cash value", "Fixed premiums", "Dividends eligible", "Loan options"]),
            pros: strings(&["Permanent coverage", "Cash value growth", "Tax advantages", "Predictable returns"]),
            cons: strings(&["Higher premiums", "Lower returns", "Less flexibility"]),
            age_range: AgeRange::new(0, 85),
            coverage_min: Money::dollars(25_000),
            coverage_max: Money::dollars(5_000_000),
            premium_structure: "Level for life".into(),
            flexibility: Flexibility::Low,
            cash_value: true,
            investment_options: false,
            popular: false,
            recommended: true,
        },
        Policy {
            id: PolicyId::from_static("universal-life"),
            name: "Universal Life Insurance".into(),
            kind: PolicyType::Universal,
            description: "Flexible permanent coverage allowing premium and death benefit adjustments with cash value accumulation.".into(),
            features: strings(&["Flexible premiums", "Adjustable death benefit", "Cash value growth", "Policy loans"]),
            pros: strings(&["Premium flexibility", "Death benefit options", "Cash accumulation", "Tax benefits"]),
            cons: strings(&["Complex structure", "Market risk", "Fees and charges"]),
            age_range: AgeRange::new(18, 80),
            coverage_min: Money::dollars(100_000),
            coverage_max: Money::dollars(10_000_000),
            premium_structure: "Flexible".into(),
            flexibility: Flexibility::High,
            cash_value: true,
            investment_options: true,
            popular: false,
            recommended: false,
        },
        Policy {
            id: PolicyId::from_static("variable-life"),
            name: "Variable Life Insurance".into(),
            kind: PolicyType::Variable,
            description: "Investment-linked permanent coverage where cash value depends on investment performance in sub-accounts.".into(),
            features: strings(&["Investment sub-accounts", "Variable cash value", "Death benefit options", "Tax-deferred growth"]),
            pros: strings(&["Investment control", "Growth potential", "Tax advantages", "Estate planning"]),
            cons: strings(&["Investment risk", "Complex management", "Higher fees"]),
            age_range: AgeRange::new(21, 75),
            coverage_min: Money::dollars(250_000),
            coverage_max: Money::dollars(25_000_000),
            premium_structure: "Fixed or flexible".into(),
            flexibility: Flexibility::High,
            cash_value: true,
            investment_options: true,
            popular: false,
            recommended: false,
        },
    ]
    .into()
});

/// Life insurance policy overview cards
pub fn policies() -> Catalog<Policy> {
    Catalog::new("policies", Arc::clone(&POLICIES))
}
