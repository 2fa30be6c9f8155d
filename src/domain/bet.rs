//! Bet records: accumulator legs and placed bets.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{MatchId, TeamId};
use super::money::Amount;

/// One selection inside an accumulator bet.
///
/// Only `odds` takes part in calculations. The odds are kept raw so that the
/// combiner can report which leg index failed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccumulatorLeg {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_id: Option<MatchId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub odds: Decimal,
}

impl AccumulatorLeg {
    /// Leg with odds only, no match or team reference.
    #[must_use]
    pub fn new(odds: Decimal) -> Self {
        Self {
            match_id: None,
            team_id: None,
            odds,
        }
    }

    #[must_use]
    pub fn for_selection(match_id: MatchId, team_id: TeamId, odds: Decimal) -> Self {
        Self {
            match_id: Some(match_id),
            team_id: Some(team_id),
            odds,
        }
    }
}

/// Lifecycle state of a placed bet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetStatus {
    #[default]
    Pending,
    Won,
    Lost,
    Cancelled,
}

impl BetStatus {
    /// Won and lost bets are settled; pending and cancelled ones are not.
    #[must_use]
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for BetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// A single placed bet, as read from a bet history export.
///
/// Bet histories store amounts and odds either as numbers or as strings,
/// both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_id: Option<MatchId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
    pub amount: Amount,
    pub odds: Decimal,
    #[serde(default)]
    pub status: BetStatus,
}

impl Bet {
    #[must_use]
    pub fn new(amount: Amount, odds: Decimal, status: BetStatus) -> Self {
        Self {
            match_id: None,
            team_id: None,
            amount,
            odds,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn leg_deserializes_from_accumulator_payload() {
        let leg: AccumulatorLeg =
            serde_json::from_str(r#"{"match_id": 3, "team_id": 9, "odds": 1.5}"#).unwrap();
        assert_eq!(leg.match_id, Some(MatchId::new(3)));
        assert_eq!(leg.team_id, Some(TeamId::new(9)));
        assert_eq!(leg.odds, dec!(1.5));
    }

    #[test]
    fn bet_accepts_string_amounts() {
        let bet: Bet =
            serde_json::from_str(r#"{"amount": "50.00", "odds": "1.85", "status": "won"}"#)
                .unwrap();
        assert_eq!(bet.amount, dec!(50));
        assert_eq!(bet.odds, dec!(1.85));
        assert_eq!(bet.status, BetStatus::Won);
    }

    #[test]
    fn only_won_and_lost_are_settled() {
        assert!(BetStatus::Won.is_settled());
        assert!(BetStatus::Lost.is_settled());
        assert!(!BetStatus::Pending.is_settled());
        assert!(!BetStatus::Cancelled.is_settled());
    }
}
