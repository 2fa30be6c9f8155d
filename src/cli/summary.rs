//! Handler for the `summary` command.

use std::fs;

use serde::Serialize;
use tabled::Tabled;

use crate::calc::BetSummary;
use crate::cli::output::{self, FigureRow};
use crate::cli::{Cli, SummaryArgs};
use crate::domain::{Bet, BetStatus};
use crate::error::Result;

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Status")]
    status: BetStatus,
    #[tabled(rename = "Bets")]
    count: u64,
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    #[serde(flatten)]
    summary: &'a BetSummary,
    #[serde(with = "rust_decimal::serde::float")]
    net_profit: rust_decimal::Decimal,
    #[serde(with = "rust_decimal::serde::float_option")]
    win_rate: Option<rust_decimal::Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    roi: Option<rust_decimal::Decimal>,
}

/// Execute `betcalc summary`.
pub fn execute(cli: &Cli, args: &SummaryArgs) -> Result<()> {
    let content = fs::read_to_string(&args.file)?;
    let bets: Vec<Bet> = serde_json::from_str(&content)?;

    let summary = BetSummary::from_bets(&bets)?;
    let roi = summary.roi()?;

    if cli.json {
        return output::json(&SummaryReport {
            summary: &summary,
            net_profit: summary.net_profit(),
            win_rate: summary.win_rate(),
            roi,
        });
    }

    output::section(&format!("Bet history ({} bets)", summary.total()));
    output::table(
        [
            BetStatus::Pending,
            BetStatus::Won,
            BetStatus::Lost,
            BetStatus::Cancelled,
        ]
        .into_iter()
        .map(|status| StatusRow {
            status,
            count: summary.count(status),
        })
        .collect(),
    );

    let na = || "n/a".to_string();
    output::section("Settled bets");
    output::table(vec![
        FigureRow::new("Total staked", output::money(summary.total_staked)),
        FigureRow::new("Total returned", output::money(summary.total_returned)),
        FigureRow::new("Net profit", output::money(summary.net_profit())),
        FigureRow::new(
            "Win rate",
            summary.win_rate().map_or_else(na, output::percent),
        ),
        FigureRow::new("ROI", roi.map_or_else(na, output::percent)),
    ]);
    Ok(())
}
