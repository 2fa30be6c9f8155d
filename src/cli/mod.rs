//! Command-line interface definitions.

pub mod calc;
pub mod check;
pub mod output;
pub mod serve;
pub mod summary;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::domain::Side;
use crate::error::Result;

/// betcalc - Betting odds calculations for e-sports wagers.
#[derive(Parser, Debug)]
#[command(name = "betcalc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults to ./betcalc.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the calculation HTTP API
    Serve(ServeArgs),

    /// Check whether odds are valid (greater than 1)
    Validate(OddsArg),

    /// Quote a single bet: potential win, profit and implied probability
    Quote(QuoteArgs),

    /// Combine accumulator legs into total odds
    Accumulator(AccumulatorArgs),

    /// Implied probability of odds, as a percentage
    Probability(OddsArg),

    /// Return on investment for a staked and returned total
    Roi(RoiArgs),

    /// Summarize a bet history exported as JSON
    Summary(SummaryArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `betcalc check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config,
}

/// Arguments for the `serve` subcommand.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Override bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Override bind port
    #[arg(long)]
    pub port: Option<u16>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}

/// Shared argument for commands that only need odds.
#[derive(Parser, Debug)]
pub struct OddsArg {
    /// Decimal odds, e.g. 1.85
    #[arg(long, allow_negative_numbers = true)]
    pub odds: Decimal,
}

/// Match side, used to pick default odds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    Team1,
    Team2,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Team1 => Side::Team1,
            SideArg::Team2 => Side::Team2,
        }
    }
}

/// Arguments for the `quote` subcommand.
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("price").required(true).multiple(true).args(["odds", "side"])))]
pub struct QuoteArgs {
    /// Amount staked
    #[arg(long, allow_negative_numbers = true)]
    pub stake: Decimal,

    /// Offered odds; with --side, 0 or absent means the side's default odds
    #[arg(long, allow_negative_numbers = true)]
    pub odds: Option<Decimal>,

    /// Side being backed
    #[arg(long, value_enum)]
    pub side: Option<SideArg>,

    /// Available balance; stakes above it are rejected
    #[arg(long)]
    pub balance: Option<Decimal>,
}

/// Arguments for the `accumulator` subcommand.
#[derive(Parser, Debug)]
pub struct AccumulatorArgs {
    /// Odds of one leg; repeat for each leg
    #[arg(long = "odds", required = true, allow_negative_numbers = true)]
    pub odds: Vec<Decimal>,

    /// Stake placed on the accumulator
    #[arg(long, allow_negative_numbers = true)]
    pub stake: Option<Decimal>,
}

/// Arguments for the `roi` subcommand.
#[derive(Parser, Debug)]
pub struct RoiArgs {
    /// Total amount staked
    #[arg(long, allow_negative_numbers = true)]
    pub staked: Decimal,

    /// Total amount returned
    #[arg(long, allow_negative_numbers = true)]
    pub returned: Decimal,
}

/// Arguments for the `summary` subcommand.
#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// JSON file holding an array of bets
    #[arg(short, long)]
    pub file: PathBuf,
}

/// Dispatch a parsed command line.
pub fn execute(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Serve(args) => serve::execute(cli, args),
        Commands::Validate(args) => calc::validate(cli, args),
        Commands::Quote(args) => calc::quote(cli, args),
        Commands::Accumulator(args) => calc::accumulator(cli, args),
        Commands::Probability(args) => calc::probability(cli, args),
        Commands::Roi(args) => calc::roi(cli, args),
        Commands::Summary(args) => summary::execute(cli, args),
        Commands::Check(CheckCommand::Config) => check::execute_config(cli),
    }
}
