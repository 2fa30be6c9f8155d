//! Monetary types and the crate-wide rounding policy.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::error::{CalcError, CalcResult};

/// Monetary amount (stake, payout, balance), currency agnostic.
pub type Amount = Decimal;

/// Number of decimal places every presented result is rounded to.
pub const MONEY_DP: u32 = 2;

/// Round to two decimal places, midpoints away from zero.
///
/// This is the only rounding step in the crate. Calculations keep full
/// precision internally and call this once on the value they return.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Parse a wire value (query parameter, CLI argument) into a decimal.
///
/// Rejects missing, blank and non-numeric input, including `NaN` and
/// infinities. Values that would lose digits when stored as a [`Decimal`]
/// are rejected too, so `1.000…0001` never collapses to `1`.
pub fn parse_decimal(field: &str, raw: Option<&str>) -> CalcResult<Decimal> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CalcError::invalid(field, "value is required"))?;

    if let Ok(value) = Decimal::from_str_exact(raw) {
        return Ok(value);
    }
    if Decimal::from_str(raw).is_ok() {
        return Err(CalcError::invalid(
            field,
            format!("'{raw}' has too many decimal places"),
        ));
    }
    Decimal::from_scientific(raw)
        .map_err(|_| CalcError::invalid(field, format!("'{raw}' is not a number")))
}

/// Require `value > 0`.
pub fn require_positive(field: &str, value: Decimal) -> CalcResult<Decimal> {
    if value <= Decimal::ZERO {
        return Err(CalcError::invalid(
            field,
            format!("must be greater than 0, got {value}"),
        ));
    }
    Ok(value)
}

/// Require `value >= 0`.
pub fn require_non_negative(field: &str, value: Decimal) -> CalcResult<Decimal> {
    if value < Decimal::ZERO {
        return Err(CalcError::invalid(
            field,
            format!("must be 0 or greater, got {value}"),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_midpoint_away_from_zero() {
        assert_eq!(round_money(dec!(1.005)), dec!(1.01));
        assert_eq!(round_money(dec!(1.004)), dec!(1.00));
        assert_eq!(round_money(dec!(-20.005)), dec!(-20.01));
        assert_eq!(round_money(dec!(92.5)), dec!(92.50));
    }

    #[test]
    fn parses_plain_and_scientific_numbers() {
        assert_eq!(parse_decimal("odds", Some("1.85")).unwrap(), dec!(1.85));
        assert_eq!(parse_decimal("odds", Some(" 2 ")).unwrap(), dec!(2));
        assert_eq!(parse_decimal("amount", Some("1e2")).unwrap(), dec!(100));
    }

    #[test]
    fn rejects_missing_blank_and_garbage() {
        for raw in [None, Some(""), Some("   "), Some("abc"), Some("NaN"), Some("inf")] {
            let err = parse_decimal("odds", raw).unwrap_err();
            assert_eq!(err.field(), "odds", "input {raw:?}");
        }
    }

    #[test]
    fn rejects_digits_beyond_decimal_scale() {
        let err = parse_decimal("odds", Some("1.00000000000000000000000000001")).unwrap_err();
        assert_eq!(err.field(), "odds");
        assert!(err.reason().contains("too many decimal places"));

        let max_scale = "1.0000000000000000000000000001";
        assert!(parse_decimal("odds", Some(max_scale)).unwrap() > Decimal::ONE);
    }

    #[test]
    fn positivity_checks() {
        assert!(require_positive("amount", dec!(0)).is_err());
        assert!(require_positive("amount", dec!(-1)).is_err());
        assert_eq!(require_positive("amount", dec!(0.01)).unwrap(), dec!(0.01));
        assert!(require_non_negative("totalReturned", dec!(0)).is_ok());
        assert!(require_non_negative("totalReturned", dec!(-0.01)).is_err());
    }
}
