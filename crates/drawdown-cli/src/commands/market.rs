//! Market command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use drawdown_core::Instrument;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{format_money, print_output};

/// One listed instrument.
#[derive(Debug, Serialize, Tabled)]
pub struct InstrumentRow {
    #[tabled(rename = "Symbol")]
    pub symbol: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Price")]
    pub price: String,
}

/// Execute the market command.
pub fn execute(context: &Context, format: OutputFormat) -> Result<()> {
    let rows: Vec<InstrumentRow> = context
        .market
        .iter()
        .map(|instrument| InstrumentRow {
            symbol: instrument.symbol().to_string(),
            category: instrument.category().to_string(),
            price: format_money(instrument.price()),
        })
        .collect();

    match format {
        OutputFormat::Minimal => {
            for instrument in context.market.iter() {
                println!("{} {}", instrument.symbol(), format_money(instrument.price()));
            }
        }
        OutputFormat::Table => {
            context.header("Market Instruments");
            print_output(&rows, &(), format)?;
        }
        OutputFormat::Json => {
            let instruments: Vec<&Instrument> = context.market.iter().collect();
            print_output(&rows, &instruments, format)?;
        }
    }

    Ok(())
}
