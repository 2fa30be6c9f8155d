//! Handlers for the one-shot calculation commands.

use crate::calc::{self, AccumulatorQuote};
use crate::cli::output::{self, FigureRow};
use crate::cli::{AccumulatorArgs, Cli, OddsArg, QuoteArgs, RoiArgs};
use crate::config::Config;
use crate::domain::{AccumulatorLeg, Side};
use crate::error::Result;

/// Execute `betcalc validate`.
pub fn validate(cli: &Cli, args: &OddsArg) -> Result<()> {
    let verdict = calc::validate_odds(args.odds);
    if cli.json {
        return output::json(&verdict);
    }

    if verdict.is_valid {
        output::ok(&format!("odds {} are valid", args.odds));
    } else {
        output::warn(&format!("odds {} are not valid (must be greater than 1)", args.odds));
    }
    Ok(())
}

/// Execute `betcalc quote`.
pub fn quote(cli: &Cli, args: &QuoteArgs) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;

    let odds = match args.side {
        Some(side) => config
            .betting
            .default_odds
            .resolve(Side::from(side), args.odds),
        None => args.odds.unwrap_or_default(),
    };

    let stake = config.betting.stake_rules().check(args.stake, args.balance)?;
    let quote = calc::quote_single(stake, odds)?;

    if cli.json {
        return output::json(&quote);
    }

    output::section("Bet quote");
    output::table(vec![
        FigureRow::new("Stake", output::money(quote.stake)),
        FigureRow::new("Odds", quote.odds.to_string()),
        FigureRow::new("Potential win", output::money(quote.potential_win)),
        FigureRow::new("Profit", output::money(quote.profit)),
        FigureRow::new("Implied probability", output::percent(quote.implied_probability)),
    ]);
    Ok(())
}

/// Execute `betcalc accumulator`.
pub fn accumulator(cli: &Cli, args: &AccumulatorArgs) -> Result<()> {
    let legs: Vec<AccumulatorLeg> = args.odds.iter().copied().map(AccumulatorLeg::new).collect();
    let quote = calc::quote_accumulator(&legs, args.stake)?;

    if cli.json {
        return output::json(&quote);
    }

    print_accumulator(&quote);
    Ok(())
}

fn print_accumulator(quote: &AccumulatorQuote) {
    output::section("Accumulator");
    let mut rows = vec![
        FigureRow::new("Legs", quote.legs.to_string()),
        FigureRow::new("Total odds", output::money(quote.total_odds)),
    ];
    if let (Some(stake), Some(win)) = (quote.stake, quote.potential_win) {
        rows.push(FigureRow::new("Stake", output::money(stake)));
        rows.push(FigureRow::new("Potential win", output::money(win)));
    }
    output::table(rows);
}

/// Execute `betcalc probability`.
pub fn probability(cli: &Cli, args: &OddsArg) -> Result<()> {
    let result = calc::implied_probability(args.odds)?;
    if cli.json {
        return output::json(&result);
    }

    output::key_value(
        "Implied probability",
        output::percent(result.implied_probability),
    );
    Ok(())
}

/// Execute `betcalc roi`.
pub fn roi(cli: &Cli, args: &RoiArgs) -> Result<()> {
    let result = calc::calculate_roi(args.staked, args.returned)?;
    if cli.json {
        return output::json(&result);
    }

    output::key_value("ROI", output::percent(result.roi));
    Ok(())
}
