//! Base coverage pricing by age bracket and smoking status

use crate::applicant::SmokerStatus;

/// Base price per 1000 units of requested coverage, default bracket
const BASE_PRICE: f64 = 0.10;

/// Look up the price per 1000 units of coverage for an (age, smoker)
/// pair. The four brackets are exhaustive over {S, NS}; an unknown
/// smoker code, or a NaN age that fails both bracket comparisons,
/// falls back to the 0.10 base price rather than erroring.
pub fn coverage_price(age: f64, smoker: SmokerStatus) -> f64 {
    let mut price = BASE_PRICE;

    if age < 40.0 && smoker == SmokerStatus::Smoker {
        price = 0.25;
    }
    if age >= 40.0 && smoker == SmokerStatus::NonSmoker {
        price = 0.30;
    }
    if age >= 40.0 && smoker == SmokerStatus::Smoker {
        price = 0.55;
    }

    price
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bracket_table() {
        assert_relative_eq!(coverage_price(33.0, SmokerStatus::NonSmoker), 0.10);
        assert_relative_eq!(coverage_price(33.0, SmokerStatus::Smoker), 0.25);
        assert_relative_eq!(coverage_price(45.0, SmokerStatus::NonSmoker), 0.30);
        assert_relative_eq!(coverage_price(45.0, SmokerStatus::Smoker), 0.55);
    }

    #[test]
    fn test_bracket_boundary_at_40() {
        assert_relative_eq!(coverage_price(39.0, SmokerStatus::Smoker), 0.25);
        assert_relative_eq!(coverage_price(40.0, SmokerStatus::Smoker), 0.55);
        assert_relative_eq!(coverage_price(40.0, SmokerStatus::NonSmoker), 0.30);
    }

    #[test]
    fn test_unknown_smoker_defaults_to_base() {
        assert_relative_eq!(coverage_price(33.0, SmokerStatus::Unknown), 0.10);
        assert_relative_eq!(coverage_price(70.0, SmokerStatus::Unknown), 0.10);
    }

    #[test]
    fn test_nan_age_defaults_to_base() {
        assert_relative_eq!(coverage_price(f64::NAN, SmokerStatus::Smoker), 0.10);
    }
}
