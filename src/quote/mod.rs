//! Quote pipeline: engine and output serialization

pub mod engine;
pub mod output;

pub use engine::{Quote, QuoteEngine, QuoteSummary};
pub use output::{write_quotes, write_quotes_to_writer, QuoteRow};
