//! Applicant data structures matching the submission CSV format

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Smoking status of the applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmokerStatus {
    /// Smoker ("S")
    Smoker,
    /// Non-smoker ("NS")
    NonSmoker,
    /// Any other code; priced at the non-smoker base rate, not rejected
    Unknown,
}

impl SmokerStatus {
    /// Parse the submission code. Unrecognized codes map to `Unknown`
    /// rather than an error; downstream pricing falls back to the base
    /// rate for them.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "S" => SmokerStatus::Smoker,
            "NS" => SmokerStatus::NonSmoker,
            _ => SmokerStatus::Unknown,
        }
    }

    pub fn is_smoker(&self) -> bool {
        matches!(self, SmokerStatus::Smoker)
    }

    /// Get the string representation matching the submission format
    pub fn as_str(&self) -> &'static str {
        match self {
            SmokerStatus::Smoker => "S",
            SmokerStatus::NonSmoker => "NS",
            SmokerStatus::Unknown => "?",
        }
    }
}

/// Declared health conditions carrying debit points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthCondition {
    Depression,
    Anxiety,
    Surgery,
    Heart,
}

impl HealthCondition {
    /// Parse a single tag from the bracketed health list.
    /// Tags outside the rated set return `None` and are dropped; they
    /// carry no debit points either way.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "DEPRESSION" => Some(HealthCondition::Depression),
            "ANXIETY" => Some(HealthCondition::Anxiety),
            "SURGERY" => Some(HealthCondition::Surgery),
            "HEART" => Some(HealthCondition::Heart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthCondition::Depression => "DEPRESSION",
            HealthCondition::Anxiety => "ANXIETY",
            HealthCondition::Surgery => "SURGERY",
            HealthCondition::Heart => "HEART",
        }
    }
}

/// Parse a bracket-delimited tag list cell, e.g. `[ANXIETY,HEART]`.
/// Empty lists (`[]` or blank cells) yield an empty set.
pub fn parse_health_tags(cell: &str) -> HashSet<HealthCondition> {
    cell.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .filter_map(HealthCondition::from_tag)
        .collect()
}

/// A single applicant record from the submission file.
///
/// Numeric fields hold NaN when the source cell was non-numeric or
/// missing; every rating comparison against NaN evaluates false, so a
/// malformed field silently contributes no risk rather than failing
/// the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Applicant {
    /// Applicant name (passed through to the quote)
    pub name: String,

    /// Contact email (not rated)
    pub email: String,

    /// Postal code (not rated)
    pub postal_code: String,

    /// Age in years at submission
    pub age: f64,

    /// Weight in kilograms
    pub weight: f64,

    /// Height in centimeters
    pub height: f64,

    /// Alcohol consumption in drinks per week
    pub alcohol: f64,

    /// Requested coverage amount in currency units
    pub policy_requested: f64,

    /// Smoking status code
    pub smoker: SmokerStatus,

    /// Declared health conditions
    pub health: HashSet<HealthCondition>,
}

impl Applicant {
    pub fn has_condition(&self, condition: HealthCondition) -> bool {
        self.health.contains(&condition)
    }
}
