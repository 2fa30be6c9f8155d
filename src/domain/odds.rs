//! Decimal odds with their validity rule.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::{CalcError, CalcResult};

/// Decimal (European) odds strictly greater than 1.
///
/// A stake of 1 at odds 1.85 returns 1.85 including the stake. The inner
/// value is private so every `Odds` in the crate has passed [`Odds::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Odds(Decimal);

impl Odds {
    /// Odds at or below this return no profit on a winning bet.
    pub const FLOOR: Decimal = Decimal::ONE;

    /// Validity rule for decimal odds: strictly greater than 1.
    #[must_use]
    pub fn is_valid(value: Decimal) -> bool {
        value > Self::FLOOR
    }

    /// Validate `value`, reporting failures against `field`.
    pub fn try_new(field: &str, value: Decimal) -> CalcResult<Self> {
        if !Self::is_valid(value) {
            return Err(CalcError::invalid(
                field,
                format!("odds must be greater than 1, got {value}"),
            ));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Odds {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Odds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::try_new("odds", value).map_err(serde::de::Error::custom)
    }
}

/// Which side of a head-to-head match a bet backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Team1,
    Team2,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Team1 => write!(f, "team1"),
            Self::Team2 => write!(f, "team2"),
        }
    }
}

/// Odds offered when a match does not carry its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultOdds {
    pub team1: Decimal,
    pub team2: Decimal,
}

impl DefaultOdds {
    #[must_use]
    pub fn for_side(&self, side: Side) -> Decimal {
        match side {
            Side::Team1 => self.team1,
            Side::Team2 => self.team2,
        }
    }

    /// Offered odds when present and non-zero, otherwise this side's default.
    #[must_use]
    pub fn resolve(&self, side: Side, offered: Option<Decimal>) -> Decimal {
        offered
            .filter(|odds| !odds.is_zero())
            .unwrap_or_else(|| self.for_side(side))
    }
}

impl Default for DefaultOdds {
    fn default() -> Self {
        Self {
            team1: dec!(1.85),
            team2: dec!(2.10),
        }
    }
}
