//! Request and response bodies of the calculation API.
//!
//! Query parameters are captured as raw strings and parsed by the handlers,
//! so a missing or non-numeric value is reported against its own field name.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::AccumulatorLeg;

/// `?odds=`
#[derive(Debug, Default, Deserialize)]
pub struct OddsQuery {
    pub odds: Option<String>,
}

/// `?amount=&odds=`
#[derive(Debug, Default, Deserialize)]
pub struct StakeQuery {
    pub amount: Option<String>,
    pub odds: Option<String>,
}

/// `?totalStaked=&totalReturned=`
#[derive(Debug, Default, Deserialize)]
pub struct RoiQuery {
    #[serde(rename = "totalStaked")]
    pub total_staked: Option<String>,
    #[serde(rename = "totalReturned")]
    pub total_returned: Option<String>,
}

/// Accumulator payload: the legs and the stake placed on the combination.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AccumulatorRequest {
    #[serde(default)]
    pub bets: Vec<AccumulatorLeg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stake: Option<Decimal>,
}

/// Combined odds, with the payout when the request carried a stake.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccumulatorResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_odds: Decimal,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub potential_win: Option<Decimal>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
