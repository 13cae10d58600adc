//! Error types for the quoting pipeline
//!
//! Only two things are fatal: an unreadable/unwritable file and CSV the
//! parser cannot tokenize. Malformed numeric cells are not errors; they
//! degrade to NaN in the loader and neutralize the rules that depend on
//! them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    /// Input unreadable or output unwritable; aborts the run
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited text the parser cannot tokenize into rows
    #[error("parse error: {0}")]
    Csv(#[from] csv::Error),
}
