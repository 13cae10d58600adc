//! Quoting engine: runs the rating pipeline over applicants

use crate::applicant::Applicant;
use crate::rating::{
    calculate_bmi, calculate_premium, coverage_price, debit_points, needs_manual_review,
    premium_multiplier,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A fully rated applicant: the input record plus every intermediate
/// rating result. The output projection keeps only name/bmi/score/
/// premium; the rest is retained for inspection and testing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// The applicant as loaded
    pub applicant: Applicant,

    /// Body-mass index, 2 decimals (non-finite for degenerate height)
    pub bmi: f64,

    /// Accumulated debit points
    pub debit: u32,

    /// Base price per 1000 units of coverage
    pub coverage_price: f64,

    /// Risk multiplier from the debit score
    pub multiplier: f64,

    /// Final quoted premium, 2 decimals
    pub premium: f64,

    /// Follow-up interview flag; informational only, never priced
    pub manual_review: bool,
}

/// Stateless quoting engine. Each stage is a pure function of the
/// fields already derived, so quoting the same applicant twice is
/// bit-identical.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteEngine;

impl QuoteEngine {
    pub fn new() -> Self {
        Self
    }

    /// Rate a single applicant through the full pipeline
    pub fn quote_applicant(&self, applicant: &Applicant) -> Quote {
        let bmi = calculate_bmi(applicant.weight, applicant.height);
        let debit = debit_points(applicant, bmi);
        let price = coverage_price(applicant.age, applicant.smoker);
        let multiplier = premium_multiplier(debit);
        let premium = calculate_premium(multiplier, price, applicant.policy_requested);

        let manual_review = needs_manual_review(debit);
        if manual_review {
            log::debug!(
                "applicant {} scored {} debit points, flagged for follow-up interview",
                applicant.name,
                debit
            );
        }

        Quote {
            applicant: applicant.clone(),
            bmi,
            debit,
            coverage_price: price,
            multiplier,
            premium,
            manual_review,
        }
    }

    /// Rate a batch of applicants in parallel. Records are independent,
    /// so the fan-out is free; the collected output preserves input
    /// order.
    pub fn quote_batch(&self, applicants: &[Applicant]) -> Vec<Quote> {
        applicants
            .par_iter()
            .map(|applicant| self.quote_applicant(applicant))
            .collect()
    }
}

/// Summary statistics for a quoted batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub total_applicants: u32,
    pub flagged_for_review: u32,
    pub total_premium: f64,
    pub total_coverage_requested: f64,
}

impl QuoteSummary {
    /// Aggregate a batch of quotes. NaN premiums (malformed source
    /// rows) are excluded from the totals so one bad row does not
    /// poison the aggregate.
    pub fn from_quotes(quotes: &[Quote]) -> Self {
        let total_premium = quotes.iter().map(|q| q.premium).filter(|p| p.is_finite()).sum();
        let total_coverage_requested = quotes
            .iter()
            .map(|q| q.applicant.policy_requested)
            .filter(|p| p.is_finite())
            .sum();

        Self {
            total_applicants: quotes.len() as u32,
            flagged_for_review: quotes.iter().filter(|q| q.manual_review).count() as u32,
            total_premium,
            total_coverage_requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applicant::{load_applicants_from_reader, parse_health_tags, SmokerStatus};
    use approx::assert_relative_eq;

    fn applicant(
        age: f64,
        smoker: SmokerStatus,
        height: f64,
        weight: f64,
        alcohol: f64,
        health: &str,
        policy_requested: f64,
    ) -> Applicant {
        Applicant {
            name: "Test".to_string(),
            email: String::new(),
            postal_code: String::new(),
            age,
            weight,
            height,
            alcohol,
            policy_requested,
            smoker,
            health: parse_health_tags(health),
        }
    }

    #[test]
    fn test_young_nonsmoker_quote() {
        let engine = QuoteEngine::new();
        let a = applicant(33.0, SmokerStatus::NonSmoker, 182.0, 76.0, 10.0, "[]", 350_000.0);
        let quote = engine.quote_applicant(&a);

        assert_relative_eq!(quote.bmi, 22.94);
        assert_eq!(quote.debit, 0);
        assert_relative_eq!(quote.coverage_price, 0.10);
        assert_relative_eq!(quote.multiplier, 1.0);
        assert_relative_eq!(quote.premium, 35.00);
        assert!(!quote.manual_review);
    }

    #[test]
    fn test_older_smoker_with_conditions() {
        let engine = QuoteEngine::new();
        let a = applicant(
            45.0,
            SmokerStatus::Smoker,
            179.0,
            90.0,
            2.0,
            "[ANXIETY,HEART]",
            200_000.0,
        );
        let quote = engine.quote_applicant(&a);

        assert_relative_eq!(quote.bmi, 28.09);
        // ANXIETY 15 + bmi>25 25 + smoker 25 + HEART 30
        assert_eq!(quote.debit, 95);
        assert_relative_eq!(quote.coverage_price, 0.55);
        assert_relative_eq!(quote.multiplier, 1.15);
        assert_relative_eq!(quote.premium, 126.50);
        assert!(quote.manual_review);
    }

    #[test]
    fn test_zero_height_does_not_panic() {
        let engine = QuoteEngine::new();
        let a = applicant(50.0, SmokerStatus::NonSmoker, 0.0, 70.0, 0.0, "[]", 100_000.0);
        let quote = engine.quote_applicant(&a);

        assert!(quote.bmi.is_infinite());
        // Infinite BMI fires both high-BMI rules
        assert_eq!(quote.debit, 55);
        assert_relative_eq!(quote.premium, 30.00);
    }

    #[test]
    fn test_quote_is_idempotent() {
        let engine = QuoteEngine::new();
        let a = applicant(45.0, SmokerStatus::Smoker, 179.0, 90.0, 2.0, "[HEART]", 200_000.0);

        let first = engine.quote_applicant(&a);
        let second = engine.quote_applicant(&a);
        assert_eq!(first.bmi.to_bits(), second.bmi.to_bits());
        assert_eq!(first.debit, second.debit);
        assert_eq!(first.premium.to_bits(), second.premium.to_bits());
    }

    #[test]
    fn test_multiplier_and_price_domains() {
        let engine = QuoteEngine::new();
        let smokers = [SmokerStatus::Smoker, SmokerStatus::NonSmoker];
        for age in [20.0, 39.0, 40.0, 85.0] {
            for smoker in smokers {
                for health in ["[]", "[DEPRESSION,ANXIETY,SURGERY,HEART]"] {
                    let a = applicant(age, smoker, 160.0, 95.0, 30.0, health, 100_000.0);
                    let q = engine.quote_applicant(&a);
                    assert!([1.0, 1.15, 1.25].contains(&q.multiplier));
                    assert!([0.10, 0.25, 0.30, 0.55]
                        .iter()
                        .any(|p| (q.coverage_price - p).abs() < 1e-12));
                }
            }
        }
    }

    #[test]
    fn test_batch_preserves_order() {
        let csv = "name,age,sex,smoker,email,height,weight,health,alcohol,postal code,policyrequested\n\
                   First,33,F,NS,,182,76,[],10,,350000\n\
                   Second,45,M,S,,179,90,\"[ANXIETY,HEART]\",2,,200000\n\
                   Third,29,F,NS,,170,60,[],0,,150000\n";
        let applicants = load_applicants_from_reader(csv.as_bytes()).unwrap();

        let engine = QuoteEngine::new();
        let quotes = engine.quote_batch(&applicants);

        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0].applicant.name, "First");
        assert_eq!(quotes[1].applicant.name, "Second");
        assert_eq!(quotes[2].applicant.name, "Third");
        assert_relative_eq!(quotes[1].premium, 126.50);
    }

    #[test]
    fn test_summary_skips_nan_premiums() {
        let engine = QuoteEngine::new();
        let good = applicant(33.0, SmokerStatus::NonSmoker, 182.0, 76.0, 0.0, "[]", 350_000.0);
        let bad = applicant(33.0, SmokerStatus::NonSmoker, 182.0, 76.0, 0.0, "[]", f64::NAN);

        let quotes = engine.quote_batch(&[good, bad]);
        let summary = QuoteSummary::from_quotes(&quotes);

        assert_eq!(summary.total_applicants, 2);
        assert_relative_eq!(summary.total_premium, 35.00);
        assert_relative_eq!(summary.total_coverage_requested, 350_000.0);
    }
}
