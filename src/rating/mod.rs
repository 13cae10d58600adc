//! Rating tables and formulas
//!
//! Each function here is a pure constant-time computation over one
//! applicant. The tables are the underwriting manual's fixed rule set;
//! none of the thresholds are configurable.

pub mod bmi;
pub mod coverage;
pub mod debits;
pub mod multiplier;
pub mod premium;

pub use bmi::{calculate_bmi, round2};
pub use coverage::coverage_price;
pub use debits::debit_points;
pub use multiplier::{needs_manual_review, premium_multiplier};
pub use premium::calculate_premium;
