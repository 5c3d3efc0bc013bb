//! Property tests: round-trip verification, single-fault correction,
//! deterministic diagnostics.

use proptest::prelude::*;
use serde_json::{json, Value};
use trifold_core::config::CorrectionConfig;
use trifold_core::models::Severity;
use trifold_core::record::Dimension;
use trifold_correction::engine::CorrectionEngine;

fn derive_secondary(canonical: &Value) -> String {
    format!(
        "{} {}",
        canonical["amount"],
        canonical["unit"].as_str().unwrap_or("?")
    )
}

fn derive_tertiary(canonical: &Value) -> Value {
    json!({"frequency": canonical["amount"].as_i64().unwrap_or(0).wrapping_mul(10)})
}

fn make_engine() -> CorrectionEngine {
    CorrectionEngine::new(CorrectionConfig::default(), derive_secondary, derive_tertiary)
}

proptest! {
    #[test]
    fn round_trip_severity_is_none(amount in any::<i64>(), unit in "[A-Za-z]{1,8}") {
        let engine = make_engine();
        let record = engine.create_record(json!({"amount": amount, "unit": unit})).unwrap();
        let verification = engine.verify(&record).unwrap();
        prop_assert_eq!(verification.diagnostic.severity, Severity::None);
    }

    #[test]
    fn single_secondary_fault_is_always_correctable(
        amount in any::<i64>(),
        unit in "[A-Za-z]{1,8}",
        garbage in ".{1,40}",
    ) {
        let engine = make_engine();
        let record = engine.create_record(json!({"amount": amount, "unit": unit})).unwrap();
        prop_assume!(garbage != record.secondary);

        let mut damaged = record.clone();
        damaged.secondary = garbage;

        let verification = engine.verify(&damaged).unwrap();
        prop_assert_eq!(verification.diagnostic.severity, Severity::Minor);
        prop_assert_eq!(
            &verification.diagnostic.corrupted_dimensions,
            &vec![Dimension::Secondary]
        );

        let outcome = engine.correct(&damaged, &verification).unwrap();
        prop_assert!(outcome.applied);
        let corrected = outcome.corrected.unwrap();
        prop_assert_eq!(&corrected.secondary, &record.secondary);

        let recheck = engine.verify(&corrected).unwrap();
        prop_assert_eq!(recheck.diagnostic.severity, Severity::None);
    }

    #[test]
    fn single_tertiary_fault_is_always_correctable(
        amount in any::<i64>(),
        unit in "[A-Za-z]{1,8}",
        wrong_frequency in any::<i64>(),
    ) {
        let engine = make_engine();
        let record = engine.create_record(json!({"amount": amount, "unit": unit})).unwrap();
        let wrong = json!({"frequency": wrong_frequency});
        prop_assume!(wrong != record.tertiary);

        let mut damaged = record.clone();
        damaged.tertiary = wrong;

        let verification = engine.verify(&damaged).unwrap();
        prop_assert_eq!(verification.diagnostic.severity, Severity::Minor);

        let outcome = engine.correct(&damaged, &verification).unwrap();
        prop_assert!(outcome.applied);
        prop_assert_eq!(&outcome.corrected.unwrap().tertiary, &record.tertiary);
    }

    #[test]
    fn verification_is_deterministic(
        amount in any::<i64>(),
        unit in "[A-Za-z]{1,8}",
        corrupt_secondary in prop::bool::ANY,
    ) {
        let engine = make_engine();
        let mut record = engine.create_record(json!({"amount": amount, "unit": unit})).unwrap();
        if corrupt_secondary {
            record.secondary.push('!');
        }

        let first = engine.verify(&record).unwrap();
        let second = engine.verify(&record).unwrap();
        prop_assert_eq!(first.diagnostic, second.diagnostic);
    }

    #[test]
    fn corrupting_both_derived_dimensions_never_classifies_minor(
        amount in any::<i64>(),
        unit in "[A-Za-z]{1,8}",
    ) {
        let engine = make_engine();
        let record = engine.create_record(json!({"amount": amount, "unit": unit})).unwrap();

        let mut damaged = record.clone();
        damaged.secondary.push('!');
        damaged.tertiary = json!({"frequency": "not-a-number"});

        let verification = engine.verify(&damaged).unwrap();
        prop_assert_eq!(verification.diagnostic.severity, Severity::Major);
    }
}
