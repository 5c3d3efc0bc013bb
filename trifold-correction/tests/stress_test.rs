//! Stress tests: concurrent verification and long supersession chains.
//!
//! The engine holds no shared mutable state, so one instance must serve
//! many threads without locking.

use std::sync::Arc;

use serde_json::{json, Value};
use trifold_core::config::CorrectionConfig;
use trifold_core::models::Severity;
use trifold_correction::engine::CorrectionEngine;

fn derive_secondary(canonical: &Value) -> String {
    format!(
        "{} {}",
        canonical["amount"],
        canonical["unit"].as_str().unwrap_or("?")
    )
}

fn derive_tertiary(canonical: &Value) -> Value {
    json!({"frequency": canonical["amount"].as_i64().unwrap_or(0) * 10})
}

#[test]
fn concurrent_verification_from_many_threads() {
    let engine = Arc::new(CorrectionEngine::new(
        CorrectionConfig::default(),
        derive_secondary,
        derive_tertiary,
    ));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                for i in 0..200 {
                    let record = engine
                        .create_record(json!({"amount": t * 1000 + i, "unit": "UR"}))
                        .unwrap();
                    let verification = engine.verify(&record).unwrap();
                    assert_eq!(verification.diagnostic.severity, Severity::None);

                    let mut damaged = record.clone();
                    damaged.secondary.push('!');
                    let verification = engine.verify(&damaged).unwrap();
                    assert_eq!(verification.diagnostic.severity, Severity::Minor);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }
}

#[test]
fn repeated_corruption_builds_a_supersession_chain() {
    let engine = CorrectionEngine::new(
        CorrectionConfig::default(),
        derive_secondary,
        derive_tertiary,
    );

    let mut current = engine
        .create_record(json!({"amount": 42, "unit": "UR"}))
        .unwrap();
    let mut seen_ids = vec![current.record_id.clone()];

    for generation in 0..10 {
        let mut damaged = current.clone();
        damaged.secondary = format!("damaged {generation}");

        let verification = engine.verify(&damaged).unwrap();
        let outcome = engine.correct(&damaged, &verification).unwrap();
        assert!(outcome.applied, "generation {generation} should correct");

        let corrected = outcome.corrected.unwrap();
        assert_eq!(
            corrected.superseded_id.as_deref(),
            Some(damaged.record_id.as_str())
        );
        assert_eq!(corrected.secondary, "42 UR");
        assert!(
            !seen_ids.contains(&corrected.record_id),
            "corrected record must have a fresh identity"
        );
        seen_ids.push(corrected.record_id.clone());
        current = corrected;
    }
}

#[test]
fn verification_volume_is_stable() {
    let engine = CorrectionEngine::new(
        CorrectionConfig::default(),
        derive_secondary,
        derive_tertiary,
    );

    for i in 0..2000 {
        let record = engine
            .create_record(json!({"amount": i, "unit": "UR"}))
            .unwrap();
        let verification = engine.verify(&record).unwrap();
        assert_eq!(verification.diagnostic.severity, Severity::None);
    }
}
