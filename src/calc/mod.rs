//! Betting calculations.
//!
//! Every function here is pure: no I/O, no shared state, and the same inputs
//! always give the same output. Each either returns its result record or a
//! single [`CalcError::InvalidInput`](crate::domain::CalcError) naming the
//! field that broke its precondition.
//!
//! | Operation | Result |
//! |---|---|
//! | [`validate_odds`] | [`OddsValidation`] |
//! | [`calculate_potential_win`] | [`PotentialWin`] |
//! | [`calculate_profit`] | [`Profit`] |
//! | [`implied_probability`] | [`ImpliedProbability`] |
//! | [`calculate_accumulator_odds`] | [`AccumulatorOdds`] |
//! | [`calculate_roi`] | [`Roi`] |
//!
//! # Example
//!
//! ```
//! use betcalc::calc::{calculate_potential_win, calculate_profit, implied_probability};
//! use rust_decimal_macros::dec;
//!
//! let win = calculate_potential_win(dec!(50), dec!(1.85)).unwrap();
//! assert_eq!(win.potential_win, dec!(92.50));
//! assert_eq!(calculate_profit(dec!(50), dec!(1.85)).unwrap().profit, dec!(42.50));
//! assert_eq!(implied_probability(dec!(2)).unwrap().implied_probability, dec!(50));
//! ```

mod accumulator;
mod payout;
mod probability;
mod quote;
mod roi;
mod stake;
mod summary;
mod validator;

pub use accumulator::{
    calculate_accumulator_odds, combine_odds, validate_legs, AccumulatorOdds, LEGS_FIELD,
};
pub use payout::{calculate_potential_win, calculate_profit, PotentialWin, Profit};
pub use probability::{implied_probability, ImpliedProbability};
pub use quote::{quote_accumulator, quote_single, AccumulatorQuote, BetQuote};
pub use roi::{calculate_roi, Roi};
pub use stake::StakeRules;
pub use summary::BetSummary;
pub use validator::{validate_odds, OddsValidation};
