//! Underwriting System CLI
//!
//! Reads an applicant submission CSV, rates every record, and writes
//! the reduced quote CSV (name,bmi,score,premium) in input order.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use underwriting_system::applicant::load_applicants;
use underwriting_system::quote::{write_quotes, QuoteEngine, QuoteSummary};

#[derive(Debug, Parser)]
#[command(name = "underwriting_system", version, about = "Premium quoting from applicant CSV submissions")]
struct Args {
    /// Path to the applicant submission CSV
    #[arg(long, default_value = "input.csv")]
    input: PathBuf,

    /// Path for the quote output CSV
    #[arg(long, default_value = "quotes.csv")]
    output: PathBuf,

    /// Optional path to dump the batch summary as JSON
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let applicants = load_applicants(&args.input)
        .with_context(|| format!("failed to load applicants from {}", args.input.display()))?;
    println!("Loaded {} applicants in {:?}", applicants.len(), start.elapsed());

    let engine = QuoteEngine::new();
    let quotes = engine.quote_batch(&applicants);

    write_quotes(&args.output, &quotes)
        .with_context(|| format!("failed to write quotes to {}", args.output.display()))?;
    println!("Quotes written to {}", args.output.display());

    let summary = QuoteSummary::from_quotes(&quotes);
    println!("\nBatch Summary:");
    println!("  Applicants:          {}", summary.total_applicants);
    println!("  Flagged for review:  {}", summary.flagged_for_review);
    println!("  Coverage requested:  ${:.2}", summary.total_coverage_requested);
    println!("  Total premium:       ${:.2}", summary.total_premium);

    if let Some(path) = &args.summary_json {
        let file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &summary)
            .with_context(|| format!("failed to write summary to {}", path.display()))?;
        println!("Summary written to {}", path.display());
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
