//! Debit point rule table
//!
//! Debits accumulate additively; every matching rule fires on its own.
//! In particular a BMI above 30 collects both the >25 and >30 penalties,
//! matching the underwriting manual's table as written.

use crate::applicant::{Applicant, HealthCondition};

/// Total debit points for one applicant against the fixed rule table.
///
/// NaN BMI or alcohol values fail every comparison, so a malformed
/// source cell simply contributes no points.
pub fn debit_points(applicant: &Applicant, bmi: f64) -> u32 {
    let mut points = 0;

    // 15-point conditions
    if applicant.has_condition(HealthCondition::Depression) {
        points += 15;
    }
    if applicant.has_condition(HealthCondition::Anxiety) {
        points += 15;
    }
    if bmi < 18.5 {
        points += 15;
    }

    // 25-point conditions
    if applicant.has_condition(HealthCondition::Surgery) {
        points += 25;
    }
    if bmi > 25.0 {
        points += 25;
    }
    if applicant.smoker.is_smoker() {
        points += 25;
    }
    if applicant.alcohol > 10.0 {
        points += 25;
    }

    // 30-point conditions
    if applicant.has_condition(HealthCondition::Heart) {
        points += 30;
    }
    if bmi > 30.0 {
        points += 30;
    }
    if applicant.alcohol > 25.0 {
        points += 30;
    }

    points
}
