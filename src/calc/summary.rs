//! Summary statistics over a bet history.

use rust_decimal::Decimal;
use serde::Serialize;

use super::payout::{calculate_potential_win, check_inputs};
use super::roi::calculate_roi;
use crate::domain::{round_money, Bet, BetStatus, CalcError, CalcResult};

/// Aggregate figures for a set of bets.
///
/// Money totals cover settled bets only: a won bet returns its potential win,
/// a lost bet returns nothing. Pending and cancelled bets are only counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BetSummary {
    pub pending: u64,
    pub won: u64,
    pub lost: u64,
    pub cancelled: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_staked: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_returned: Decimal,
}

impl BetSummary {
    /// Summarize `bets`, failing on the first settled bet with invalid
    /// amount or odds.
    pub fn from_bets(bets: &[Bet]) -> CalcResult<Self> {
        bets.iter().try_fold(Self::default(), |mut summary, bet| {
            summary.record(bet)?;
            Ok(summary)
        })
    }

    fn record(&mut self, bet: &Bet) -> CalcResult<()> {
        match bet.status {
            BetStatus::Pending => self.pending += 1,
            BetStatus::Cancelled => self.cancelled += 1,
            BetStatus::Won => {
                let win = calculate_potential_win(bet.amount, bet.odds)?;
                self.total_staked = add("total_staked", self.total_staked, bet.amount)?;
                self.total_returned = add("total_returned", self.total_returned, win.potential_win)?;
                self.won += 1;
            }
            BetStatus::Lost => {
                check_inputs(bet.amount, bet.odds)?;
                self.total_staked = add("total_staked", self.total_staked, bet.amount)?;
                self.lost += 1;
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.pending + self.won + self.lost + self.cancelled
    }

    #[must_use]
    pub fn count(&self, status: BetStatus) -> u64 {
        match status {
            BetStatus::Pending => self.pending,
            BetStatus::Won => self.won,
            BetStatus::Lost => self.lost,
            BetStatus::Cancelled => self.cancelled,
        }
    }

    /// Calculate net profit.
    #[must_use]
    pub fn net_profit(&self) -> Decimal {
        self.total_returned - self.total_staked
    }

    /// Won share of settled bets as a percentage, `None` with nothing settled.
    #[must_use]
    pub fn win_rate(&self) -> Option<Decimal> {
        let settled = self.won + self.lost;
        if settled == 0 {
            return None;
        }
        let rate = Decimal::from(self.won) * Decimal::ONE_HUNDRED / Decimal::from(settled);
        Some(round_money(rate))
    }

    /// ROI over settled bets, `None` when nothing has been staked.
    pub fn roi(&self) -> CalcResult<Option<Decimal>> {
        if self.total_staked.is_zero() {
            return Ok(None);
        }
        calculate_roi(self.total_staked, self.total_returned).map(|r| Some(r.roi))
    }
}

fn add(field: &str, total: Decimal, value: Decimal) -> CalcResult<Decimal> {
    total
        .checked_add(value)
        .ok_or_else(|| CalcError::invalid(field, "running total is out of range"))
}
