//! Cross-consistency localization: re-derive the non-canonical dimensions
//! from canonical, compare byte-for-byte, and classify overall severity.
//!
//! A dimension can pass the detector (its bytes match its own stored hash)
//! and still be wrong: stale or tampered content whose hash was recomputed
//! to hide the change. Re-derivation from the source of truth catches that.
//!
//! Classification is asymmetric by design. Secondary and tertiary are
//! functions of canonical, not independent witnesses, so there is no 2-of-3
//! vote: canonical is authoritative, and damage to it always escalates.

use trifold_core::config::CorrectionConfig;
use trifold_core::constants;
use trifold_core::models::{CorruptionDiagnostic, Severity};
use trifold_core::record::{CorrectionTarget, Dimension, TrifoldRecord};

use crate::detector::DetectionReport;
use crate::{DeriveSecondaryFn, DeriveTertiaryFn};

/// Result of comparing stored derived dimensions against re-derivation.
#[derive(Debug, Clone, Copy)]
pub struct DriftReport {
    pub secondary_drifted: bool,
    pub tertiary_drifted: bool,
}

/// Re-derive both derived dimensions from the stored canonical value and
/// compare each against the stored representation.
pub fn rederive_compare(
    record: &TrifoldRecord,
    derive_secondary: &DeriveSecondaryFn,
    derive_tertiary: &DeriveTertiaryFn,
) -> DriftReport {
    DriftReport {
        secondary_drifted: derive_secondary(&record.canonical) != record.secondary,
        tertiary_drifted: derive_tertiary(&record.canonical) != record.tertiary,
    }
}

/// Combine detector and drift findings into a diagnostic.
pub fn classify(
    record_id: &str,
    detection: &DetectionReport,
    drift: &DriftReport,
    config: &CorrectionConfig,
) -> CorruptionDiagnostic {
    let canonical_bad = !detection.canonical_hash_ok;
    // When canonical itself is damaged, re-derivation ran from a corrupt
    // source; only the detector's hash checks are meaningful for the
    // derived dimensions.
    let secondary_bad = if canonical_bad {
        !detection.secondary_hash_ok
    } else {
        !detection.secondary_hash_ok || drift.secondary_drifted
    };
    let tertiary_bad = if canonical_bad {
        !detection.tertiary_hash_ok
    } else {
        !detection.tertiary_hash_ok || drift.tertiary_drifted
    };

    let mut corrupted = Vec::new();
    let mut healthy = Vec::new();
    for (dimension, bad) in [
        (Dimension::Canonical, canonical_bad),
        (Dimension::Secondary, secondary_bad),
        (Dimension::Tertiary, tertiary_bad),
    ] {
        if bad {
            corrupted.push(dimension);
        } else {
            healthy.push(dimension);
        }
    }

    let confidence = corruption_confidence(detection, drift, config, &corrupted);

    let (severity, target, combined_hash_corrupted, reason) =
        if canonical_bad && secondary_bad && tertiary_bad {
            (
                Severity::Critical,
                None,
                false,
                "all three representations corrupted; unrecoverable".to_string(),
            )
        } else if canonical_bad {
            (
                Severity::Major,
                None,
                false,
                "canonical representation failed its hash; the source of truth is not reconstructible"
                    .to_string(),
            )
        } else if secondary_bad && tertiary_bad {
            // Two derivations disagreeing with the same intact source is
            // suspicious; report, never auto-correct.
            (
                Severity::Major,
                None,
                false,
                "both derived representations disagree with an intact canonical".to_string(),
            )
        } else if secondary_bad || tertiary_bad {
            let dimension = if secondary_bad {
                Dimension::Secondary
            } else {
                Dimension::Tertiary
            };
            let how = if damage_hash_confirmed(dimension, detection) {
                "stored hash mismatch"
            } else {
                "re-derivation mismatch with internally consistent hash"
            };
            (
                Severity::Minor,
                Some(CorrectionTarget::Dimension(dimension)),
                false,
                format!("{dimension} representation corrupted ({how})"),
            )
        } else if !detection.combined_hash_ok {
            // Administrative field only. Always minor, always repairable by
            // recomputation, never by altering content.
            (
                Severity::Minor,
                Some(CorrectionTarget::CombinedHash),
                true,
                "stored combined hash disagrees while all representations check out".to_string(),
            )
        } else {
            return CorruptionDiagnostic::healthy(record_id);
        };

    CorruptionDiagnostic {
        record_id: record_id.to_string(),
        severity,
        corrupted_dimensions: corrupted,
        healthy_dimensions: healthy,
        combined_hash_corrupted,
        target,
        confidence,
        reason,
    }
}

/// Whether the detector itself observed the damage to `dimension`.
fn damage_hash_confirmed(dimension: Dimension, detection: &DetectionReport) -> bool {
    match dimension {
        Dimension::Canonical => !detection.canonical_hash_ok,
        Dimension::Secondary => !detection.secondary_hash_ok,
        Dimension::Tertiary => !detection.tertiary_hash_ok,
    }
}

/// Localization confidence: 1.0 where the stored hash confirms the damage,
/// lower where only re-derivation disagrees. Minimum across corrupted
/// dimensions.
fn corruption_confidence(
    detection: &DetectionReport,
    drift: &DriftReport,
    config: &CorrectionConfig,
    corrupted: &[Dimension],
) -> f64 {
    if corrupted.is_empty() {
        return constants::CONFIDENCE_ADMINISTRATIVE;
    }
    corrupted
        .iter()
        .map(|&dimension| {
            if damage_hash_confirmed(dimension, detection) {
                constants::CONFIDENCE_HASH_CONFIRMED
            } else {
                debug_assert!(match dimension {
                    Dimension::Secondary => drift.secondary_drifted,
                    Dimension::Tertiary => drift.tertiary_drifted,
                    Dimension::Canonical => false,
                });
                config.drift_only_confidence
            }
        })
        .fold(f64::INFINITY, f64::min)
}
