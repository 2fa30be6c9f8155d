//! Application configuration loading and validation.
//!
//! Configuration is read from a TOML file. Every section is optional and
//! falls back to defaults, so an empty file is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use betcalc::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::load("betcalc.toml")?;
//!     config.apply_env()?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

pub mod logging;
pub mod server;

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calc::StakeRules;
use crate::domain::{DefaultOdds, Odds};
use crate::error::{ConfigError, Result};

pub use logging::LoggingConfig;
pub use server::{ServerConfig, HOST_ENV, PORT_ENV};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "betcalc.toml";

/// Bet placement settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BettingConfig {
    /// Smallest stake accepted when quoting a bet.
    #[serde(default = "default_min_stake")]
    pub min_stake: Decimal,

    /// Odds used for a side when the match does not offer any.
    #[serde(default)]
    pub default_odds: DefaultOdds,
}

fn default_min_stake() -> Decimal {
    Decimal::ONE
}

impl BettingConfig {
    #[must_use]
    pub fn stake_rules(&self) -> StakeRules {
        StakeRules {
            min_stake: self.min_stake,
        }
    }
}

impl Default for BettingConfig {
    fn default() -> Self {
        Self {
            min_stake: default_min_stake(),
            default_odds: DefaultOdds::default(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// HTTP server bind address.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Stake limits and fallback odds.
    #[serde(default)]
    pub betting: BettingConfig,
}

impl Config {
    /// Parse and validate configuration from TOML content.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` when given; otherwise load [`DEFAULT_CONFIG_FILE`] if it
    /// exists, or fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::load(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Apply `BETCALC_HOST` / `BETCALC_PORT` overrides and re-validate.
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var(HOST_ENV) {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var(PORT_ENV) {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: PORT_ENV,
                reason: format!("'{port}' is not a valid port"),
            })?;
        }
        self.validate()
    }

    /// Validate configuration values.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "host" }.into());
        }
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !LoggingConfig::FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("must be one of {}", LoggingConfig::FORMATS.join(", ")),
            }
            .into());
        }
        if self.betting.min_stake <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "min_stake",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        let defaults = &self.betting.default_odds;
        if !Odds::is_valid(defaults.team1) || !Odds::is_valid(defaults.team2) {
            return Err(ConfigError::InvalidValue {
                field: "default_odds",
                reason: "odds must be greater than 1".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
