//! Quote output projection and CSV serialization

use super::engine::Quote;
use crate::error::QuoteError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Public output row: the reduced projection of a rated applicant.
/// `score` is the debit total under its published column name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRow {
    pub name: String,
    pub bmi: f64,
    pub score: u32,
    pub premium: f64,
}

impl QuoteRow {
    pub fn from_quote(quote: &Quote) -> Self {
        Self {
            name: quote.applicant.name.clone(),
            bmi: quote.bmi,
            score: quote.debit,
            premium: quote.premium,
        }
    }
}

/// Write quotes as CSV with header `name,bmi,score,premium`, one row
/// per quote in the order given. Quoting of embedded delimiters is the
/// csv crate's responsibility.
pub fn write_quotes<P: AsRef<Path>>(path: P, quotes: &[Quote]) -> Result<(), QuoteError> {
    let file = std::fs::File::create(path)?;
    write_quotes_to_writer(file, quotes)
}

/// Write quotes to any writer (e.g., byte buffer in tests).
/// bmi and premium render at 2 decimals; a non-finite bmi sentinel
/// serializes as-is rather than aborting the batch.
pub fn write_quotes_to_writer<W: std::io::Write>(
    writer: W,
    quotes: &[Quote],
) -> Result<(), QuoteError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["name", "bmi", "score", "premium"])?;
    for quote in quotes {
        let row = QuoteRow::from_quote(quote);
        csv_writer.write_record([
            row.name,
            format_2dp(row.bmi),
            row.score.to_string(),
            format_2dp(row.premium),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render a derived value at 2 decimals; NaN and infinity keep their
/// sentinel spelling.
fn format_2dp(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        value.to_string()
    }
}
