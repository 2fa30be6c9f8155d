//! Shared CLI output helpers for consistent operator-facing text.

use std::fmt::Display;

use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::Result;

const RULE_WIDTH: usize = 40;

/// Print a section header and separator.
pub fn section(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Print a simple key/value line.
pub fn key_value(label: &str, value: impl Display) {
    println!("{label:<18} {value}");
}

/// Print a successful status line.
pub fn ok(message: &str) {
    println!("✓ {message}");
}

/// Print a warning status line.
pub fn warn(message: &str) {
    println!("⚠ {message}");
}

/// Print an error status line.
pub fn error(message: &str) {
    eprintln!("✗ {message}");
}

/// Format a decimal as a two-place money figure.
#[must_use]
pub fn money(value: Decimal) -> String {
    format!("{value:.2}")
}

/// Format a decimal percentage.
#[must_use]
pub fn percent(value: Decimal) -> String {
    format!("{value:.2}%")
}

/// Print a value as pretty JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print an indented table.
pub fn table<T: Tabled>(rows: Vec<T>) {
    let table = Table::new(rows).to_string();
    for line in table.lines() {
        println!("  {line}");
    }
}

/// Two-column row for key/value tables.
#[derive(Tabled)]
pub struct FigureRow {
    #[tabled(rename = "Figure")]
    pub label: &'static str,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl FigureRow {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}
