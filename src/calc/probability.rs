//! Implied probability of decimal odds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{round_money, CalcError, CalcResult, Odds};

/// Break-even win probability, as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpliedProbability {
    #[serde(with = "rust_decimal::serde::float")]
    pub implied_probability: Decimal,
}

/// `100 / odds`, rounded to two decimals.
///
/// Odds must satisfy the same `> 1` rule as everywhere else, which also keeps
/// zero and negative odds (division by zero, negative percentages) out.
pub fn implied_probability(odds: Decimal) -> CalcResult<ImpliedProbability> {
    let odds = Odds::try_new("odds", odds)?;
    let pct = Decimal::ONE_HUNDRED
        .checked_div(odds.value())
        .ok_or_else(|| CalcError::invalid("odds", "cannot divide by odds"))?;

    Ok(ImpliedProbability {
        implied_probability: round_money(pct),
    })
}
