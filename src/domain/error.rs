//! Validation errors for betting calculations.
//!
//! Every calculation either succeeds completely or fails with exactly one
//! [`CalcError::InvalidInput`] naming the offending field. There are no other
//! failure kinds: calculations perform no I/O.
//!
//! # Examples
//!
//! ```
//! use betcalc::calc::implied_probability;
//! use betcalc::domain::error::CalcError;
//! use rust_decimal_macros::dec;
//!
//! let result = implied_probability(dec!(0));
//! assert!(matches!(result, Err(CalcError::InvalidInput { ref field, .. }) if field == "odds"));
//! ```

use thiserror::Error;

/// Errors raised when a calculation input violates its precondition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// A supplied value is missing, non-numeric or out of range.
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        /// Wire name of the rejected field, e.g. `amount` or `bets[2].odds`.
        field: String,
        /// Human readable description of the violated rule.
        reason: String,
    },
}

impl CalcError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the field that failed validation.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidInput { field, .. } => field,
        }
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidInput { reason, .. } => reason,
        }
    }
}

pub type CalcResult<T> = std::result::Result<T, CalcError>;
