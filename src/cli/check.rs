//! Handler for `betcalc check config`.

use crate::cli::{output, Cli};
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::Result;

/// Validate configuration file without starting the server.
pub fn execute_config(cli: &Cli) -> Result<()> {
    match cli.config.as_deref() {
        Some(path) => println!("Checking configuration: {}", path.display()),
        None => println!("Checking configuration: {DEFAULT_CONFIG_FILE} (if present)"),
    }

    let config = Config::load_or_default(cli.config.as_deref())?;
    output::ok("Configuration is valid");

    output::section("Summary");
    output::key_value("Bind address", config.server.bind_addr());
    output::key_value(
        "Logging",
        format!("{} ({})", config.logging.level, config.logging.format),
    );
    output::key_value("Minimum stake", output::money(config.betting.min_stake));
    output::key_value(
        "Default odds",
        format!(
            "team1 {} / team2 {}",
            config.betting.default_odds.team1, config.betting.default_odds.team2
        ),
    );
    Ok(())
}
