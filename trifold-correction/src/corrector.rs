//! Correction: regenerate a damaged derived dimension from canonical.
//!
//! Never mutates the input record. The replacement is a new record value
//! with a fresh identity and a `superseded_id` back-reference, so a
//! half-written fix can never clobber the original.

use trifold_core::models::CorruptionDiagnostic;
use trifold_core::record::{CorrectionTarget, Dimension, RecordHashes, TrifoldRecord};
use trifold_core::{TrifoldError, TrifoldResult};

use crate::hasher;
use crate::{DeriveSecondaryFn, DeriveTertiaryFn};

/// Build the corrected replacement for `record`.
///
/// Preconditions, rejected with `PreconditionViolation`:
/// - diagnostic severity is exactly `Minor`;
/// - the diagnostic carries a target;
/// - the target is never the canonical dimension.
pub fn apply(
    record: &TrifoldRecord,
    diagnostic: &CorruptionDiagnostic,
    derive_secondary: &DeriveSecondaryFn,
    derive_tertiary: &DeriveTertiaryFn,
) -> TrifoldResult<TrifoldRecord> {
    if !diagnostic.severity.is_correctable() {
        return Err(TrifoldError::PreconditionViolation {
            details: format!(
                "corrector requires a minor diagnostic, got {:?}",
                diagnostic.severity
            ),
        });
    }
    let target = diagnostic
        .target
        .ok_or_else(|| TrifoldError::PreconditionViolation {
            details: "minor diagnostic carries no correction target".to_string(),
        })?;
    if target == CorrectionTarget::Dimension(Dimension::Canonical) {
        return Err(TrifoldError::PreconditionViolation {
            details: "canonical dimension is the source of truth and is never corrected"
                .to_string(),
        });
    }

    let canonical = record.canonical.clone();
    let (secondary, tertiary) = match target {
        CorrectionTarget::Dimension(Dimension::Secondary) => {
            (derive_secondary(&canonical), record.tertiary.clone())
        }
        CorrectionTarget::Dimension(Dimension::Tertiary) => {
            (record.secondary.clone(), derive_tertiary(&canonical))
        }
        // Administrative repair: content untouched, only the stored
        // combined hash is recomputed below.
        CorrectionTarget::CombinedHash => (record.secondary.clone(), record.tertiary.clone()),
        CorrectionTarget::Dimension(Dimension::Canonical) => unreachable!(),
    };

    let hashes = match target {
        CorrectionTarget::Dimension(Dimension::Secondary) => RecordHashes {
            canonical: record.hash_canonical.clone(),
            secondary: hasher::hash_text(&secondary),
            tertiary: record.hash_tertiary.clone(),
            combined: hasher::combined_hash(&canonical, &secondary, &tertiary)?,
        },
        CorrectionTarget::Dimension(Dimension::Tertiary) => RecordHashes {
            canonical: record.hash_canonical.clone(),
            secondary: record.hash_secondary.clone(),
            tertiary: hasher::hash_value(Dimension::Tertiary, &tertiary)?,
            combined: hasher::combined_hash(&canonical, &secondary, &tertiary)?,
        },
        CorrectionTarget::CombinedHash => RecordHashes {
            canonical: record.hash_canonical.clone(),
            secondary: record.hash_secondary.clone(),
            tertiary: record.hash_tertiary.clone(),
            combined: hasher::combined_hash(&canonical, &secondary, &tertiary)?,
        },
        CorrectionTarget::Dimension(Dimension::Canonical) => unreachable!(),
    };

    let mut corrected = TrifoldRecord::new(canonical, secondary, tertiary, hashes);
    corrected.superseded_id = Some(record.record_id.clone());
    Ok(corrected)
}
