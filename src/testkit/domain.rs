//! Builders for domain values used across tests.
//!
//! Provides concise factory functions for [`AccumulatorLeg`] and [`Bet`] so
//! tests focus on assertions rather than construction boilerplate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{AccumulatorLeg, Bet, BetStatus, MatchId, TeamId};

/// Legs with the given odds and no match references.
pub fn legs(odds: &[Decimal]) -> Vec<AccumulatorLeg> {
    odds.iter().copied().map(AccumulatorLeg::new).collect()
}

/// Legs for matches `1..=n`, backing team `10 * match id`.
pub fn selections(odds: &[Decimal]) -> Vec<AccumulatorLeg> {
    odds.iter()
        .zip(1u64..)
        .map(|(&odds, id)| AccumulatorLeg::for_selection(MatchId::new(id), TeamId::new(id * 10), odds))
        .collect()
}

/// Create a [`Bet`] with the given stake, odds and status.
pub fn bet(amount: Decimal, odds: Decimal, status: BetStatus) -> Bet {
    Bet::new(amount, odds, status)
}

/// A mixed history: one win at 1.85, two losses, one pending, one cancelled.
///
/// Settled totals: staked 100.00, returned 92.50.
pub fn mixed_history() -> Vec<Bet> {
    vec![
        bet(dec!(50), dec!(1.85), BetStatus::Won),
        bet(dec!(30), dec!(2.10), BetStatus::Lost),
        bet(dec!(20), dec!(3.00), BetStatus::Lost),
        bet(dec!(10), dec!(1.50), BetStatus::Pending),
        bet(dec!(5), dec!(1.20), BetStatus::Cancelled),
    ]
}
