//! Handler for the `serve` command.

use tracing::info;

use crate::api;
use crate::cli::{Cli, ServeArgs};
use crate::config::Config;
use crate::error::Result;

/// Execute the serve command.
pub fn execute(cli: &Cli, args: &ServeArgs) -> Result<()> {
    // Load and merge configuration
    let mut config = Config::load_or_default(cli.config.as_deref())?;
    config.apply_env()?;

    // Apply CLI overrides
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
    config.validate()?;

    config.init_logging();
    info!(
        addr = %config.server.bind_addr(),
        log_format = %config.logging.format,
        "betcalc starting"
    );

    actix_web::rt::System::new().block_on(api::serve(&config))?;
    Ok(())
}
