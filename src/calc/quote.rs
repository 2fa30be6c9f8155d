//! Bet slip quotes: every figure a bettor sees before placing a bet.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::accumulator::{combine_odds, LEGS_FIELD};
use super::payout::{calculate_potential_win, calculate_profit, check_inputs};
use super::probability::implied_probability;
use crate::domain::{require_positive, round_money, AccumulatorLeg, Amount, CalcError, CalcResult};

/// Quote for a single-selection bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetQuote {
    #[serde(with = "rust_decimal::serde::float")]
    pub stake: Amount,
    #[serde(with = "rust_decimal::serde::float")]
    pub odds: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub potential_win: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub implied_probability: Decimal,
}

/// Quote for an accumulator, with a payout when a stake is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccumulatorQuote {
    pub legs: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_odds: Decimal,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub stake: Option<Amount>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub potential_win: Option<Decimal>,
}

pub fn quote_single(stake: Amount, odds: Decimal) -> CalcResult<BetQuote> {
    check_inputs(stake, odds)?;

    Ok(BetQuote {
        stake,
        odds,
        potential_win: calculate_potential_win(stake, odds)?.potential_win,
        profit: calculate_profit(stake, odds)?.profit,
        implied_probability: implied_probability(odds)?.implied_probability,
    })
}

/// Combined odds plus, for a given stake, the accumulator payout.
///
/// The payout multiplies the stake by the unrounded combined odds so rounding
/// happens once.
pub fn quote_accumulator(
    legs: &[AccumulatorLeg],
    stake: Option<Amount>,
) -> CalcResult<AccumulatorQuote> {
    let combined = combine_odds(legs)?;

    let potential_win = stake
        .map(|stake| {
            let stake = require_positive("stake", stake)?;
            stake
                .checked_mul(combined)
                .map(round_money)
                .ok_or_else(|| CalcError::invalid(LEGS_FIELD, "accumulator payout is out of range"))
        })
        .transpose()?;

    Ok(AccumulatorQuote {
        legs: legs.len(),
        total_odds: round_money(combined),
        stake,
        potential_win,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn single_quote_end_to_end() {
        let quote = quote_single(dec!(50), dec!(1.85)).unwrap();
        assert_eq!(quote.potential_win, dec!(92.50));
        assert_eq!(quote.profit, dec!(42.50));
        assert_eq!(quote.implied_probability, dec!(54.05));
    }

    #[test]
    fn single_quote_rejects_bad_stake_first() {
        let err = quote_single(dec!(0), dec!(0)).unwrap_err();
        assert_eq!(err.field(), "amount");
    }

    #[test]
    fn accumulator_quote_without_stake() {
        let legs = [dec!(1.5), dec!(2.0), dec!(1.8)].map(AccumulatorLeg::new);
        let quote = quote_accumulator(&legs, None).unwrap();
        assert_eq!(quote.legs, 3);
        assert_eq!(quote.total_odds, dec!(5.40));
        assert_eq!(quote.potential_win, None);
    }

    #[test]
    fn accumulator_payout_uses_unrounded_odds() {
        // 1.333 * 1.333 = 1.776889; 100 * 1.776889 = 177.6889 -> 177.69
        // (rounding the odds first would give 178.00)
        let legs = [dec!(1.333), dec!(1.333)].map(AccumulatorLeg::new);
        let quote = quote_accumulator(&legs, Some(dec!(100))).unwrap();
        assert_eq!(quote.total_odds, dec!(1.78));
        assert_eq!(quote.potential_win, Some(dec!(177.69)));
    }

    #[test]
    fn accumulator_rejects_non_positive_stake() {
        let legs = [AccumulatorLeg::new(dec!(2))];
        let err = quote_accumulator(&legs, Some(dec!(-5))).unwrap_err();
        assert_eq!(err.field(), "stake");
    }
}
