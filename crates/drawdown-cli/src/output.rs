//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use drawdown_risk::RiskLevel;

use crate::cli::OutputFormat;

/// Prints rows as a table or `document` as JSON.
///
/// Minimal output is the command's headline value, which each command prints
/// itself, so this prints nothing for it.
pub fn print_output<T, D>(rows: &[T], document: &D, format: OutputFormat) -> anyhow::Result<()>
where
    T: Tabled,
    D: Serialize + ?Sized,
{
    match format {
        OutputFormat::Table => print_table(rows),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(document)?);
        }
        OutputFormat::Minimal => {}
    }
    Ok(())
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(rows: &[T]) {
    if rows.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
}

/// Formats a currency amount.
pub fn format_money(value: f64) -> String {
    format!("{:.2}", value)
}

/// Formats a percentage.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Colored risk label.
pub fn risk_label(level: RiskLevel) -> String {
    match level {
        RiskLevel::High => level.to_string().red().bold().to_string(),
        RiskLevel::Acceptable => level.to_string().green().to_string(),
    }
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair formatted as a currency amount.
    pub fn from_money(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_money(value))
    }

    /// Creates a key-value pair formatted as a percentage.
    pub fn from_percent(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_percent(value))
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatting() {
        assert_eq!(format_money(15_400.0), "15400.00");
        assert_eq!(format_percent(12.345), "12.35%");
        assert_eq!(KeyValue::from_percent("Max Drawdown", 3.0).value, "3.00%");
    }

    #[test]
    fn test_risk_label_text() {
        colored::control::set_override(false);
        assert_eq!(risk_label(RiskLevel::High), "High Risk");
        assert_eq!(risk_label(RiskLevel::Acceptable), "Risk Acceptable");
    }
}
