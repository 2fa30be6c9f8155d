mod support;

use betcalc::config::{Config, ServerConfig, HOST_ENV, PORT_ENV};
use betcalc::error::{ConfigError, Error};
use rust_decimal_macros::dec;

use support::write_temp_config;

fn load(toml: &str) -> betcalc::error::Result<Config> {
    let (_dir, path) = write_temp_config(toml);
    Config::load(&path)
}

#[test]
fn config_loads_full_file() {
    let toml = r#"
[server]
host = "0.0.0.0"
port = 9000

[logging]
level = "debug"
format = "json"

[betting]
min_stake = 5

[betting.default_odds]
team1 = 1.5
team2 = 2.5
"#;

    let config = load(toml).expect("valid config");
    assert_eq!(config.server.bind_addr(), "0.0.0.0:9000");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.betting.min_stake, dec!(5));
    assert_eq!(config.betting.default_odds.team1, dec!(1.5));
    assert_eq!(config.betting.default_odds.team2, dec!(2.5));
}

#[test]
fn config_empty_file_uses_defaults() {
    let config = load("").expect("empty config is valid");
    assert_eq!(config.server, ServerConfig::default());
    assert_eq!(config.logging.format, "pretty");
    assert_eq!(config.betting.min_stake, dec!(1));
}

#[test]
fn config_rejects_zero_port() {
    match load("[server]\nport = 0\n") {
        Err(Error::Config(ConfigError::InvalidValue { field: "port", .. })) => {}
        Err(err) => panic!("Expected invalid port error, got {err}"),
        Ok(config) => panic!("Expected port 0 to be rejected, got {}", config.server.port),
    }
}

#[test]
fn config_rejects_blank_host() {
    match load("[server]\nhost = \"  \"\n") {
        Err(Error::Config(ConfigError::MissingField { field: "host" })) => {}
        Err(err) => panic!("Expected missing host error, got {err}"),
        Ok(config) => panic!("Expected blank host to be rejected, got {}", config.server.host),
    }
}

#[test]
fn config_rejects_unknown_log_format() {
    match load("[logging]\nformat = \"xml\"\n") {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "format", ..
        })) => {}
        Err(err) => panic!("Expected invalid format error, got {err}"),
        Ok(config) => panic!(
            "Expected format to be rejected, got {}",
            config.logging.format
        ),
    }
}

#[test]
fn config_rejects_non_positive_min_stake() {
    match load("[betting]\nmin_stake = 0\n") {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "min_stake",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid min_stake error, got {err}"),
        Ok(config) => panic!(
            "Expected min_stake to be rejected, got {}",
            config.betting.min_stake
        ),
    }
}

#[test]
fn config_rejects_default_odds_of_one() {
    let toml = "[betting.default_odds]\nteam1 = 1.0\nteam2 = 2.1\n";
    match load(toml) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "default_odds",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid default odds error, got {err}"),
        Ok(_) => panic!("Expected default odds of 1 to be rejected"),
    }
}

#[test]
fn config_rejects_malformed_toml() {
    assert!(matches!(
        load("[server\nport = 1"),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn config_missing_file_is_read_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let result = Config::load(dir.path().join("absent.toml"));
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn config_explicit_path_must_exist() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("absent.toml");
    assert!(Config::load_or_default(Some(missing.as_path())).is_err());
}

/// Environment overrides share process state, so they run in one test.
#[test]
fn config_env_overrides_server_section() {
    let mut config = load("[server]\nhost = \"127.0.0.1\"\nport = 8080\n").expect("valid config");

    std::env::set_var(HOST_ENV, "0.0.0.0");
    std::env::set_var(PORT_ENV, "9090");
    let applied = config.apply_env();
    std::env::remove_var(HOST_ENV);
    std::env::remove_var(PORT_ENV);

    applied.expect("env overrides are valid");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9090);

    let mut config = Config::default();
    std::env::set_var(PORT_ENV, "eighty");
    let result = config.apply_env();
    std::env::remove_var(PORT_ENV);

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "BETCALC_PORT",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid BETCALC_PORT error, got {err}"),
        Ok(()) => panic!("Expected non-numeric port to be rejected"),
    }
    assert_eq!(config.server.port, 8080);
}
