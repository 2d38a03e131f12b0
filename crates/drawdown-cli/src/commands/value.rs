//! Value command implementation.
//!
//! Prices every holding on the base market and prints the total.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{format_money, print_output};

/// One row of the valuation table.
#[derive(Debug, Tabled)]
pub struct PositionRow {
    #[tabled(rename = "Symbol")]
    pub symbol: String,
    #[tabled(rename = "Quantity")]
    pub quantity: String,
    #[tabled(rename = "Price")]
    pub price: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

/// One priced holding.
#[derive(Debug, Serialize)]
pub struct Position {
    pub symbol: String,
    pub quantity: u64,
    pub price: f64,
    pub value: f64,
}

#[derive(Debug, Serialize)]
struct ValueOutput<'a> {
    positions: &'a [Position],
    total: f64,
    reference_capital: f64,
}

/// Execute the value command.
pub fn execute(context: &Context, format: OutputFormat) -> Result<()> {
    let total = context.engine.value(&context.portfolio, &context.market)?;

    let positions = context
        .portfolio
        .holdings()
        .iter()
        .map(|(symbol, &quantity)| {
            let price = context.market.price(symbol.as_str())?;
            Ok(Position {
                symbol: symbol.to_string(),
                quantity,
                price,
                value: price * quantity as f64,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    match format {
        OutputFormat::Minimal => println!("{}", format_money(total)),
        OutputFormat::Table => {
            // Quantities of different symbols are not summed
            let mut rows: Vec<PositionRow> = positions
                .iter()
                .map(|p| PositionRow {
                    symbol: p.symbol.clone(),
                    quantity: p.quantity.to_string(),
                    price: format_money(p.price),
                    value: format_money(p.value),
                })
                .collect();
            rows.push(PositionRow {
                symbol: "TOTAL".to_string(),
                quantity: String::new(),
                price: String::new(),
                value: format_money(total),
            });
            context.header("Portfolio Valuation");
            print_output(&rows, &(), format)?;
        }
        OutputFormat::Json => {
            let document = ValueOutput {
                positions: &positions,
                total,
                reference_capital: context.portfolio.reference_capital(),
            };
            print_output::<PositionRow, _>(&[], &document, format)?;
        }
    }

    Ok(())
}
