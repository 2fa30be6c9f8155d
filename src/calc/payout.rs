//! Potential win and profit for a single stake.
//!
//! ```text
//! potential_win = round2(amount * odds)
//! profit        = round2(potential_win - amount)
//! ```
//!
//! Profit is derived from the rounded potential win, so for stakes in whole
//! cents the two results always agree exactly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{require_positive, round_money, Amount, CalcError, CalcResult, Odds};

/// Total payout of a winning bet, stake included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotentialWin {
    #[serde(with = "rust_decimal::serde::float")]
    pub potential_win: Decimal,
}

/// Net gain of a winning bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profit {
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
}

/// Validated stake multiplied by validated odds, at full precision.
pub(crate) fn gross_return(amount: Amount, odds: Odds) -> CalcResult<Decimal> {
    amount
        .checked_mul(odds.value())
        .ok_or_else(|| CalcError::invalid("amount", "stake times odds is out of range"))
}

pub(crate) fn check_inputs(amount: Amount, odds: Decimal) -> CalcResult<(Amount, Odds)> {
    let amount = require_positive("amount", amount)?;
    let odds = Odds::try_new("odds", odds)?;
    Ok((amount, odds))
}

/// `amount * odds`, rounded to cents.
pub fn calculate_potential_win(amount: Amount, odds: Decimal) -> CalcResult<PotentialWin> {
    let (amount, odds) = check_inputs(amount, odds)?;
    Ok(PotentialWin {
        potential_win: round_money(gross_return(amount, odds)?),
    })
}

/// Potential win minus the stake.
pub fn calculate_profit(amount: Amount, odds: Decimal) -> CalcResult<Profit> {
    let win = calculate_potential_win(amount, odds)?;
    Ok(Profit {
        profit: round_money(win.potential_win - amount),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn potential_win_rounds_to_cents() {
        let win = calculate_potential_win(dec!(50), dec!(1.85)).unwrap();
        assert_eq!(win.potential_win, dec!(92.50));

        let win = calculate_potential_win(dec!(3.33), dec!(1.333)).unwrap();
        // 4.43889 -> 4.44
        assert_eq!(win.potential_win, dec!(4.44));
    }

    #[test]
    fn profit_is_potential_win_minus_stake() {
        let profit = calculate_profit(dec!(50), dec!(1.85)).unwrap();
        assert_eq!(profit.profit, dec!(42.50));

        let amount = dec!(12.34);
        let odds = dec!(2.37);
        let win = calculate_potential_win(amount, odds).unwrap().potential_win;
        assert_eq!(calculate_profit(amount, odds).unwrap().profit, win - amount);
    }

    #[test]
    fn odds_just_above_one_round_to_the_stake() {
        let win = calculate_potential_win(dec!(1), dec!(1.001)).unwrap();
        assert_eq!(win.potential_win, dec!(1.00));
        assert_eq!(calculate_profit(dec!(1), dec!(1.001)).unwrap().profit, dec!(0.00));

        let win = calculate_potential_win(dec!(5), dec!(1.001)).unwrap();
        assert_eq!(win.potential_win, dec!(5.01));
    }

    #[test]
    fn rejects_non_positive_amount() {
        for amount in [dec!(0), dec!(-10)] {
            let err = calculate_potential_win(amount, dec!(2)).unwrap_err();
            assert_eq!(err.field(), "amount");
        }
    }

    #[test]
    fn rejects_odds_at_or_below_one() {
        for odds in [dec!(1), dec!(0.5), dec!(0)] {
            let err = calculate_profit(dec!(10), odds).unwrap_err();
            assert_eq!(err.field(), "odds");
        }
    }

    #[test]
    fn overflow_is_invalid_input_not_panic() {
        let err = calculate_potential_win(Decimal::MAX, dec!(2)).unwrap_err();
        assert_eq!(err.field(), "amount");
    }

    #[test]
    fn serializes_as_numbers() {
        let json = serde_json::to_string(&calculate_potential_win(dec!(50), dec!(1.85)).unwrap())
            .unwrap();
        assert_eq!(json, r#"{"potential_win":92.5}"#);
    }
}
