//! Stake acceptance rules applied before a bet is placed.

use rust_decimal::Decimal;

use crate::domain::{require_positive, Amount, CalcError, CalcResult};

/// Limits a stake must respect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeRules {
    /// Smallest accepted stake.
    pub min_stake: Amount,
}

impl Default for StakeRules {
    fn default() -> Self {
        Self {
            min_stake: Decimal::ONE,
        }
    }
}

impl StakeRules {
    /// Accept `stake` if it is positive, at least the minimum, and covered by
    /// `balance` when the balance is known.
    pub fn check(&self, stake: Amount, balance: Option<Amount>) -> CalcResult<Amount> {
        let stake = require_positive("amount", stake)?;

        if stake < self.min_stake {
            return Err(CalcError::invalid(
                "amount",
                format!("minimum stake is {}, got {stake}", self.min_stake),
            ));
        }

        if let Some(balance) = balance {
            if stake > balance {
                return Err(CalcError::invalid(
                    "amount",
                    format!("insufficient balance: {balance:.2} available, {stake:.2} requested"),
                ));
            }
        }

        Ok(stake)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn accepts_stake_within_limits() {
        let rules = StakeRules::default();
        assert_eq!(rules.check(dec!(50), Some(dec!(100))).unwrap(), dec!(50));
        assert_eq!(rules.check(dec!(1), None).unwrap(), dec!(1));
        assert_eq!(rules.check(dec!(100), Some(dec!(100))).unwrap(), dec!(100));
    }

    #[test]
    fn rejects_below_minimum() {
        let rules = StakeRules {
            min_stake: dec!(10),
        };
        let err = rules.check(dec!(9.99), None).unwrap_err();
        assert_eq!(err.field(), "amount");
        assert!(err.reason().contains("minimum stake"));
    }

    #[test]
    fn rejects_unaffordable_stake() {
        let err = StakeRules::default()
            .check(dec!(150), Some(dec!(120.5)))
            .unwrap_err();
        assert_eq!(
            err.reason(),
            "insufficient balance: 120.50 available, 150.00 requested"
        );
    }

    #[test]
    fn rejects_non_positive_stake() {
        assert!(StakeRules::default().check(dec!(0), None).is_err());
    }
}
