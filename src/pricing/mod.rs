//! Pricing module
//!
//! - Rate card: base fares, style multipliers and daily base rates
//! - Travel cost calculation
//! - Budget aggregation into the final breakdown

pub mod estimator;
pub mod rates;
pub mod travel;

pub use estimator::BudgetEstimator;
pub use rates::{CURRENCY, DailyRates, FareTable, RateCard, STANDARD_RATES, StyleMultipliers, StyleTable};
pub use travel::travel_cost;

use crate::{Result, TripBudgetError};

/// Largest amount that f64 still represents exactly
const MAX_AMOUNT: f64 = 9_007_199_254_740_992.0;

/// Round a cost line to whole currency units, halves rounding up.
///
/// Amounts that are negative, not finite or beyond exact f64 integer range
/// are calculation errors.
pub(crate) fn round_amount(line: &str, amount: f64) -> Result<u64> {
    if !amount.is_finite() || !(0.0..=MAX_AMOUNT).contains(&amount) {
        return Err(TripBudgetError::calculation(format!(
            "{line} amount out of range: {amount}"
        )));
    }
    Ok(amount.round() as u64)
}
