//! Closed-form estimates shown next to catalog entries: life insurance
//! coverage needs and a rough monthly cost for a property listing.
//!
//! All arithmetic is integer and rounds half up to the nearest unit.

use serde::{Deserialize, Serialize};
use vitrine_model::Money;

/// Multiple of annual income to replace
pub const INCOME_MULTIPLE: u64 = 10;
/// Education allowance per dependent
pub const PER_DEPENDENT: Money = Money::dollars(100_000);
/// Flat allowance for final expenses
pub const FINAL_EXPENSES: Money = Money::dollars(25_000);
/// Coverage recommendations are quoted in steps of this amount
pub const COVERAGE_STEP: u64 = 50_000;

/// Down payment share, in percent of the list price
pub const DOWN_PAYMENT_PERCENT: u64 = 20;

/// Household figures for the coverage calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageInputs {
    pub age: u8,
    pub income: Money,
    pub debt: Money,
    pub dependents: u32,
    pub expenses: Money,
    pub savings: Money,
}

impl Default for CoverageInputs {
    fn default() -> Self {
        Self {
            age: 35,
            income: Money::dollars(75_000),
            debt: Money::dollars(250_000),
            dependents: 2,
            expenses: Money::dollars(60_000),
            savings: Money::dollars(50_000),
        }
    }
}

/// Recommended face amount.
///
/// Sums ten years of income, outstanding debt, an allowance per dependent,
/// final expenses and half a year of expenses, subtracts savings, clamps at
/// zero and rounds to the nearest [`COVERAGE_STEP`].
pub fn coverage_needs(inputs: &CoverageInputs) -> Money {
    // Work in half-dollars so the half-year expense term stays exact
    let whole = u128::from(inputs.income.value()) * u128::from(INCOME_MULTIPLE)
        + u128::from(inputs.debt.value())
        + u128::from(PER_DEPENDENT.value()) * u128::from(inputs.dependents)
        + u128::from(FINAL_EXPENSES.value());
    let halves = (whole * 2 + u128::from(inputs.expenses.value()))
        .saturating_sub(u128::from(inputs.savings.value()) * 2);

    let step_halves = u128::from(COVERAGE_STEP) * 2;
    let steps = (halves + step_halves / 2) / step_halves;
    let dollars = steps * u128::from(COVERAGE_STEP);
    Money::dollars(u64::try_from(dollars).unwrap_or(u64::MAX))
}

/// Financing breakdown for a listing price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageEstimate {
    pub price: Money,
    pub down_payment: Money,
    pub loan_amount: Money,
    pub monthly_payment: Money,
}

/// Monthly cost: 0.7% of the 80% loan plus a twelfth of 1.2% annual tax.
pub fn monthly_payment_estimate(price: Money) -> Money {
    // price * 0.8 * 0.007 + price * 0.012 / 12 == price * 66 / 10_000
    let scaled = u128::from(price.value()) * 66;
    let dollars = (scaled + 5_000) / 10_000;
    Money::dollars(u64::try_from(dollars).unwrap_or(u64::MAX))
}

/// Down payment for a listing price
pub fn down_payment(price: Money) -> Money {
    let dollars = (u128::from(price.value()) * u128::from(DOWN_PAYMENT_PERCENT) + 50) / 100;
    Money::dollars(u64::try_from(dollars).unwrap_or(u64::MAX))
}

pub fn mortgage_estimate(price: Money) -> MortgageEstimate {
    let down = down_payment(price);
    MortgageEstimate {
        price,
        down_payment: down,
        loan_amount: price.saturating_sub(down),
        monthly_payment: monthly_payment_estimate(price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_household_needs_1_2_million() {
        assert_eq!(
            coverage_needs(&CoverageInputs::default()),
            Money::dollars(1_200_000)
        );
    }

    #[test]
    fn savings_beyond_needs_clamp_to_zero() {
        let inputs = CoverageInputs {
            income: Money::ZERO,
            debt: Money::ZERO,
            dependents: 0,
            expenses: Money::ZERO,
            savings: Money::dollars(10_000_000),
            ..Default::default()
        };
        assert_eq!(coverage_needs(&inputs), Money::ZERO);
    }

    #[test]
    fn coverage_rounds_half_up() {
        // 25,000 final expenses alone sits exactly on the half step
        let inputs = CoverageInputs {
            income: Money::ZERO,
            debt: Money::ZERO,
            dependents: 0,
            expenses: Money::ZERO,
            savings: Money::ZERO,
            ..Default::default()
        };
        assert_eq!(coverage_needs(&inputs), Money::dollars(50_000));

        let inputs = CoverageInputs {
            savings: Money::dollars(1),
            ..inputs
        };
        assert_eq!(coverage_needs(&inputs), Money::ZERO);
    }

    #[test]
    fn beverly_hills_estate_payment() {
        let estimate = mortgage_estimate(Money::dollars(8_500_000));
        assert_eq!(estimate.monthly_payment, Money::dollars(56_100));
        assert_eq!(estimate.down_payment, Money::dollars(1_700_000));
        assert_eq!(estimate.loan_amount, Money::dollars(6_800_000));
    }

    #[test]
    fn payment_rounds_to_whole_dollars() {
        // 2,850,000 * 0.0066 = 18,810
        assert_eq!(
            monthly_payment_estimate(Money::dollars(2_850_000)),
            Money::dollars(18_810)
        );
        // 1,234 * 0.0066 = 8.1444
        assert_eq!(monthly_payment_estimate(Money::dollars(1_234)), Money::dollars(8));
    }
}
