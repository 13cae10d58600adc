//! Underwriting System - Premium quoting pipeline for life insurance applicants
//!
//! This library provides:
//! - Applicant loading from submission CSV files (permissive, NaN-tolerant)
//! - Rating tables: BMI, debit points, coverage price, risk multiplier
//! - Per-applicant and parallel batch quoting
//! - Quote output projection and CSV serialization

pub mod applicant;
pub mod error;
pub mod quote;
pub mod rating;

// Re-export commonly used types
pub use applicant::{Applicant, HealthCondition, SmokerStatus};
pub use error::QuoteError;
pub use quote::{Quote, QuoteEngine, QuoteRow, QuoteSummary};
