//! Accumulator (multi-leg) odds combination.
//!
//! An accumulator pays out only if every leg wins, so its odds are the product
//! of the leg odds. All legs are validated before anything is multiplied; the
//! first invalid leg is reported by index.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{round_money, AccumulatorLeg, CalcError, CalcResult, Odds};

/// Wire name of the legs collection.
pub const LEGS_FIELD: &str = "bets";

/// Combined odds of an accumulator, rounded for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccumulatorOdds {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_odds: Decimal,
}

/// Validate every leg, returning the typed odds in leg order.
pub fn validate_legs(legs: &[AccumulatorLeg]) -> CalcResult<Vec<Odds>> {
    if legs.is_empty() {
        return Err(CalcError::invalid(LEGS_FIELD, "at least one leg required"));
    }

    legs.iter()
        .enumerate()
        .map(|(i, leg)| Odds::try_new(&format!("{LEGS_FIELD}[{i}].odds"), leg.odds))
        .collect()
}

/// Product of all leg odds at full precision.
///
/// Use this when the result feeds another calculation; round once at the end.
pub fn combine_odds(legs: &[AccumulatorLeg]) -> CalcResult<Decimal> {
    validate_legs(legs)?
        .into_iter()
        .try_fold(Decimal::ONE, |acc, odds| acc.checked_mul(odds.value()))
        .ok_or_else(|| CalcError::invalid(LEGS_FIELD, "combined odds are out of range"))
}

/// Combined odds rounded to two decimals.
pub fn calculate_accumulator_odds(legs: &[AccumulatorLeg]) -> CalcResult<AccumulatorOdds> {
    Ok(AccumulatorOdds {
        total_odds: round_money(combine_odds(legs)?),
    })
}
