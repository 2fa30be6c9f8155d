//! betcalc - Betting odds calculations for e-sports wagers.
//!
//! This crate converts between stakes, decimal odds and payouts, validates
//! odds, combines accumulator legs and computes return on investment. The
//! calculations are pure functions over [`rust_decimal::Decimal`] with a single
//! rounding policy (two places, midpoint away from zero).
//!
//! # Modules
//!
//! - [`calc`] - The calculations: odds validation, potential win, profit,
//!   implied probability, accumulator odds, ROI, quotes and bet summaries
//! - [`domain`] - Odds, amounts, bets and the `InvalidInput` error
//! - [`api`] - actix-web HTTP surface mirroring `/bets/calculate/*`
//! - [`cli`] - The `betcalc` command line
//! - [`config`] - Configuration loading from TOML files
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use betcalc::calc::{calculate_accumulator_odds, calculate_roi};
//! use betcalc::domain::AccumulatorLeg;
//! use rust_decimal_macros::dec;
//!
//! let legs = [dec!(1.5), dec!(2.0), dec!(1.8)].map(AccumulatorLeg::new);
//! assert_eq!(calculate_accumulator_odds(&legs).unwrap().total_odds, dec!(5.40));
//! assert_eq!(calculate_roi(dec!(100), dec!(80)).unwrap().roi, dec!(-20));
//! ```

pub mod api;
pub mod calc;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
