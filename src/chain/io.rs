use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use super::types::OptionQuote;
use crate::types::OptionType;

/// CSV row layout: `option_type,strike,spot,years_to_exp,market_price`
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "option_type")]
    option_type: String,
    #[serde(rename = "strike")]
    strike: f64,
    #[serde(rename = "spot")]
    spot: f64,
    #[serde(rename = "years_to_exp")]
    years_to_exp: f64,
    #[serde(rename = "market_price")]
    market_price: f64,
}

/// Read option quotes from any CSV source with a header row.
///
/// Option types accept "call"/"put" and the one-letter forms, any case.
pub fn read_quotes<R: Read>(reader: R) -> Result<Vec<OptionQuote>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut quotes = Vec::new();

    for (line, result) in reader.deserialize().enumerate() {
        // Header occupies line 1
        let row: CsvRow = result.with_context(|| format!("bad quote row at line {}", line + 2))?;
        let option_type: OptionType = row
            .option_type
            .parse()
            .with_context(|| format!("bad option type at line {}", line + 2))?;

        quotes.push(OptionQuote {
            option_type,
            strike: row.strike,
            spot: row.spot,
            years_to_exp: row.years_to_exp,
            market_price: row.market_price,
        });
    }

    Ok(quotes)
}

/// Load option quotes from a CSV file.
pub fn load_quotes_csv(path: impl AsRef<Path>) -> Result<Vec<OptionQuote>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open quote file {}", path.display()))?;
    read_quotes(file).with_context(|| format!("in {}", path.display()))
}
