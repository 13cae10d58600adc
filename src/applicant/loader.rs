//! Load applicants from a submission CSV

use super::{parse_health_tags, Applicant, SmokerStatus};
use crate::error::QuoteError;
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

/// Column positions resolved from the header row.
///
/// Cells are read by index rather than serde-deserialized: a record
/// shorter than the header simply has no cell at the higher indices,
/// and those reads degrade to empty strings (then NaN for numeric
/// fields) instead of aborting the batch. A column the header does not
/// carry at all resolves to `None` with the same effect; there is no
/// schema validation.
#[derive(Debug)]
struct Columns {
    name: Option<usize>,
    smoker: Option<usize>,
    email: Option<usize>,
    age: Option<usize>,
    height: Option<usize>,
    weight: Option<usize>,
    health: Option<usize>,
    alcohol: Option<usize>,
    postal_code: Option<usize>,
    policy_requested: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);
        Self {
            name: find("name"),
            smoker: find("smoker"),
            email: find("email"),
            age: find("age"),
            height: find("height"),
            weight: find("weight"),
            health: find("health"),
            alcohol: find("alcohol"),
            postal_code: find("postal code"),
            policy_requested: find("policyrequested"),
        }
    }

    fn to_applicant(&self, record: &StringRecord) -> Applicant {
        let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("");
        Applicant {
            name: cell(self.name).to_string(),
            email: cell(self.email).to_string(),
            postal_code: cell(self.postal_code).to_string(),
            age: coerce_number(cell(self.age)),
            weight: coerce_number(cell(self.weight)),
            height: coerce_number(cell(self.height)),
            alcohol: coerce_number(cell(self.alcohol)),
            policy_requested: coerce_number(cell(self.policy_requested)),
            smoker: SmokerStatus::from_code(cell(self.smoker)),
            health: parse_health_tags(cell(self.health)),
        }
    }
}

/// Coerce a submission cell to f64. Anything that is not a plain
/// decimal number (including an empty cell from a short row) becomes
/// NaN, the sentinel that every rating comparison treats as false.
fn coerce_number(cell: &str) -> f64 {
    cell.trim().parse().unwrap_or(f64::NAN)
}

/// Load all applicants from a submission CSV file
pub fn load_applicants<P: AsRef<Path>>(path: P) -> Result<Vec<Applicant>, QuoteError> {
    let file = std::fs::File::open(path)?;
    load_applicants_from_reader(file)
}

/// Load applicants from any reader (e.g., string buffer, network stream).
/// The reader runs in flexible mode so short and long rows tokenize;
/// short rows yield missing cells rather than errors.
pub fn load_applicants_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<Applicant>, QuoteError> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = Columns::from_headers(csv_reader.headers()?);

    let mut applicants = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        applicants.push(columns.to_applicant(&record));
    }

    log::debug!("loaded {} applicants", applicants.len());
    Ok(applicants)
}
