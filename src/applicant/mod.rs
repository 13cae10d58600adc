//! Applicant data structures and submission loading

mod data;
pub mod loader;

pub use data::{parse_health_tags, Applicant, HealthCondition, SmokerStatus};
pub use loader::{load_applicants, load_applicants_from_reader};
