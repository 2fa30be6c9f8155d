//! Betting domain types: odds, amounts, bets and their validation errors.

pub mod error;
mod bet;
mod id;
mod money;
mod odds;

pub use bet::{AccumulatorLeg, Bet, BetStatus};
pub use error::{CalcError, CalcResult};
pub use id::{MatchId, TeamId};
pub use money::{
    parse_decimal, require_non_negative, require_positive, round_money, Amount, MONEY_DP,
};
pub use odds::{DefaultOdds, Odds, Side};
