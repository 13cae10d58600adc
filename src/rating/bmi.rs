//! Body-mass index calculation

/// Round to 2 decimal places, half away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Metric BMI from weight in kilograms and height in centimeters.
/// The usual weight/height² formula uses meters; the ×10⁴ factor
/// rescales for centimeter input.
///
/// No bounds checking: zero height yields infinity and a NaN input
/// yields NaN, both of which flow through the rating tables as
/// sentinels instead of aborting.
pub fn calculate_bmi(weight: f64, height: f64) -> f64 {
    round2(weight / (height * height) * 10_000.0)
}
