//! Odds validation verdicts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::Odds;

/// Verdict on a proposed odds value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OddsValidation {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
}

/// Accept or reject a decimal odds value.
///
/// Valid iff `odds > 1`. Any number is accepted as input, including zero and
/// negatives; this never fails.
#[must_use]
pub fn validate_odds(odds: Decimal) -> OddsValidation {
    OddsValidation {
        is_valid: Odds::is_valid(odds),
    }
}
