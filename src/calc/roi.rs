//! Return on investment over a set of bets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{require_non_negative, require_positive, round_money, CalcError, CalcResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roi {
    #[serde(with = "rust_decimal::serde::float")]
    pub roi: Decimal,
}

/// `(returned - staked) / staked * 100`, rounded to two decimals.
///
/// A net loss gives a negative ROI, which is a result, not an error.
pub fn calculate_roi(total_staked: Decimal, total_returned: Decimal) -> CalcResult<Roi> {
    let staked = require_positive("totalStaked", total_staked)?;
    let returned = require_non_negative("totalReturned", total_returned)?;

    let roi = (returned - staked)
        .checked_div(staked)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| CalcError::invalid("totalReturned", "return on investment is out of range"))?;

    Ok(Roi {
        roi: round_money(roi),
    })
}
