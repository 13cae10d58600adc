//! Final premium calculation

use super::bmi::round2;

/// Final quoted premium: multiplier × price-per-1000 × (requested
/// coverage / 1000), rounded to 2 decimals. A NaN requested amount
/// propagates to a NaN premium.
pub fn calculate_premium(multiplier: f64, coverage_price: f64, policy_requested: f64) -> f64 {
    round2(multiplier * coverage_price * (policy_requested / 1000.0))
}
