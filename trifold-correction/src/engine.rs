//! CorrectionEngine - runs detection, localization, correction, and
//! validation for one record at a time, and keeps the cycle's audit trail.

use serde_json::Value;
use tracing::{info, warn};

use trifold_core::config::CorrectionConfig;
use trifold_core::models::{CorrectionOutcome, CorruptionDiagnostic, LogAction, Severity, Verification};
use trifold_core::record::{CorrectionTarget, Dimension, TrifoldRecord};
use trifold_core::traits::{ICorrector, IVerifier};
use trifold_core::{TrifoldError, TrifoldResult};

use crate::log::CorrectionLog;
use crate::{corrector, detector, hasher, localizer, validator};
use crate::{DeriveSecondaryFn, DeriveTertiaryFn};

/// The self-correction engine.
///
/// Owns the configuration and the two injected derivation functions. Holds
/// no other state: `verify` and `correct` are functions of their inputs, so
/// one engine can serve many concurrent callers.
pub struct CorrectionEngine {
    config: CorrectionConfig,
    derive_secondary: Box<DeriveSecondaryFn>,
    derive_tertiary: Box<DeriveTertiaryFn>,
}

impl CorrectionEngine {
    pub fn new(
        config: CorrectionConfig,
        derive_secondary: impl Fn(&Value) -> String + Send + Sync + 'static,
        derive_tertiary: impl Fn(&Value) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            config,
            derive_secondary: Box::new(derive_secondary),
            derive_tertiary: Box::new(derive_tertiary),
        }
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &CorrectionConfig {
        &self.config
    }

    /// Build a record from a canonical value: apply both derivations and
    /// compute all four stored hashes.
    pub fn create_record(&self, canonical: Value) -> TrifoldResult<TrifoldRecord> {
        let secondary = (self.derive_secondary)(&canonical);
        let tertiary = (self.derive_tertiary)(&canonical);
        let hashes = hasher::hash_parts(&canonical, &secondary, &tertiary)?;
        Ok(TrifoldRecord::new(canonical, secondary, tertiary, hashes))
    }

    /// Verify a record: detector, then localizer.
    ///
    /// Integrity mismatches come back as data in the diagnostic. A
    /// representation that cannot be serialized for hashing surfaces as a
    /// `major` diagnostic rather than an error.
    pub fn verify(&self, record: &TrifoldRecord) -> TrifoldResult<Verification> {
        let mut log = CorrectionLog::new();

        let detection = match detector::detect(record) {
            Ok(detection) => detection,
            Err(TrifoldError::Serialization { dimension, reason }) => {
                log.record(
                    LogAction::Detected,
                    Some(dimension),
                    Some(stored_hash(record, dimension).to_string()),
                    None,
                    format!("{dimension} representation could not be serialized: {reason}"),
                );
                let diagnostic = serialization_diagnostic(&record.record_id, dimension, &reason);
                warn!(
                    record_id = %record.record_id,
                    %dimension,
                    "representation not serializable; escalating as major"
                );
                return Ok(Verification {
                    diagnostic,
                    log: log.into_entries(),
                });
            }
            Err(e) => return Err(e),
        };

        let failures = detection.hash_failures();
        match failures.first() {
            Some(&dimension) => log.record(
                LogAction::Detected,
                Some(dimension),
                Some(stored_hash(record, dimension).to_string()),
                Some(recomputed_hash(&detection, dimension).to_string()),
                format!(
                    "{} stored hash(es) disagree with recomputed content",
                    failures.len()
                ),
            ),
            None if !detection.combined_hash_ok => log.record(
                LogAction::Detected,
                None,
                Some(record.hash_combined.clone()),
                Some(detection.recomputed.combined.clone()),
                "stored combined hash disagrees with recomputed content",
            ),
            None => log.record(
                LogAction::Detected,
                None,
                None,
                None,
                "all stored hashes match recomputed content",
            ),
        }

        let drift =
            localizer::rederive_compare(record, &*self.derive_secondary, &*self.derive_tertiary);
        let diagnostic =
            localizer::classify(&record.record_id, &detection, &drift, &self.config);

        log.record(
            LogAction::Localized,
            diagnostic.corrupted_dimensions.first().copied(),
            None,
            None,
            diagnostic.reason.clone(),
        );

        match diagnostic.severity {
            Severity::Major | Severity::Critical => warn!(
                record_id = %record.record_id,
                severity = ?diagnostic.severity,
                confidence = diagnostic.confidence,
                "uncorrectable corruption: {}", diagnostic.reason
            ),
            Severity::Minor => info!(
                record_id = %record.record_id,
                "correctable corruption localized: {}", diagnostic.reason
            ),
            Severity::None => {}
        }

        Ok(Verification {
            diagnostic,
            log: log.into_entries(),
        })
    }

    /// Attempt to correct a verified record.
    ///
    /// `minor` diagnostics are repaired and the fix re-validated; `none`
    /// returns the record untouched; `major`/`critical` come back as an
    /// explicit not-correctable outcome. A malformed minor diagnostic is a
    /// `PreconditionViolation`; a correction that fails re-validation is an
    /// `InternalConsistency` error.
    pub fn correct(
        &self,
        record: &TrifoldRecord,
        verification: &Verification,
    ) -> TrifoldResult<CorrectionOutcome> {
        let diagnostic = verification.diagnostic.clone();
        let mut log = CorrectionLog::from_entries(verification.log.clone());

        match diagnostic.severity {
            Severity::None => Ok(CorrectionOutcome {
                original: record.clone(),
                corrected: None,
                diagnostic,
                applied: false,
                log: log.into_entries(),
            }),
            Severity::Major | Severity::Critical => {
                log.record(
                    LogAction::Failed,
                    diagnostic.corrupted_dimensions.first().copied(),
                    None,
                    None,
                    format!("not correctable: {}", diagnostic.reason),
                );
                warn!(
                    record_id = %record.record_id,
                    severity = ?diagnostic.severity,
                    "correction refused: {}", diagnostic.reason
                );
                Ok(CorrectionOutcome {
                    original: record.clone(),
                    corrected: None,
                    diagnostic,
                    applied: false,
                    log: log.into_entries(),
                })
            }
            Severity::Minor => {
                if diagnostic.target == Some(CorrectionTarget::CombinedHash)
                    && !self.config.auto_repair_admin_hash
                {
                    log.record(
                        LogAction::Failed,
                        None,
                        None,
                        None,
                        "administrative combined-hash repair disabled by configuration",
                    );
                    return Ok(CorrectionOutcome {
                        original: record.clone(),
                        corrected: None,
                        diagnostic,
                        applied: false,
                        log: log.into_entries(),
                    });
                }

                let corrected = corrector::apply(
                    record,
                    &diagnostic,
                    &*self.derive_secondary,
                    &*self.derive_tertiary,
                )?;

                let (dimension, hash_before, hash_after) =
                    corrected_hashes(record, &corrected, &diagnostic);
                log.record(
                    LogAction::Corrected,
                    dimension,
                    Some(hash_before),
                    Some(hash_after),
                    format!(
                        "regenerated {} from canonical",
                        diagnostic
                            .target
                            .map(|t| t.to_string())
                            .unwrap_or_default()
                    ),
                );

                match validator::validate(
                    &corrected,
                    &*self.derive_secondary,
                    &*self.derive_tertiary,
                    &self.config,
                ) {
                    Ok(()) => {
                        log.record(
                            LogAction::Validated,
                            dimension,
                            None,
                            Some(corrected.hash_combined.clone()),
                            "corrected record re-verified clean",
                        );
                        info!(
                            record_id = %record.record_id,
                            corrected_id = %corrected.record_id,
                            "correction applied and validated"
                        );
                        Ok(CorrectionOutcome {
                            original: record.clone(),
                            corrected: Some(corrected),
                            diagnostic,
                            applied: true,
                            log: log.into_entries(),
                        })
                    }
                    Err(e) => {
                        tracing::error!(
                            record_id = %record.record_id,
                            "correction failed validation: {e}"
                        );
                        Err(e)
                    }
                }
            }
        }
    }
}

impl IVerifier for CorrectionEngine {
    fn verify(&self, record: &TrifoldRecord) -> TrifoldResult<Verification> {
        CorrectionEngine::verify(self, record)
    }
}

impl ICorrector for CorrectionEngine {
    fn correct(
        &self,
        record: &TrifoldRecord,
        verification: &Verification,
    ) -> TrifoldResult<CorrectionOutcome> {
        CorrectionEngine::correct(self, record, verification)
    }
}

/// Diagnostic for a representation that could not be serialized for hashing.
fn serialization_diagnostic(
    record_id: &str,
    dimension: Dimension,
    reason: &str,
) -> CorruptionDiagnostic {
    let healthy = [Dimension::Canonical, Dimension::Secondary, Dimension::Tertiary]
        .into_iter()
        .filter(|&d| d != dimension)
        .collect();
    CorruptionDiagnostic {
        record_id: record_id.to_string(),
        severity: Severity::Major,
        corrupted_dimensions: vec![dimension],
        healthy_dimensions: healthy,
        combined_hash_corrupted: false,
        target: None,
        confidence: 1.0,
        reason: format!("{dimension} representation could not be serialized: {reason}"),
    }
}

fn stored_hash(record: &TrifoldRecord, dimension: Dimension) -> &str {
    match dimension {
        Dimension::Canonical => &record.hash_canonical,
        Dimension::Secondary => &record.hash_secondary,
        Dimension::Tertiary => &record.hash_tertiary,
    }
}

fn recomputed_hash(detection: &detector::DetectionReport, dimension: Dimension) -> &str {
    match dimension {
        Dimension::Canonical => &detection.recomputed.canonical,
        Dimension::Secondary => &detection.recomputed.secondary,
        Dimension::Tertiary => &detection.recomputed.tertiary,
    }
}

/// Which hashes changed for the log's corrected entry.
fn corrected_hashes(
    original: &TrifoldRecord,
    corrected: &TrifoldRecord,
    diagnostic: &CorruptionDiagnostic,
) -> (Option<Dimension>, String, String) {
    match diagnostic.target {
        Some(CorrectionTarget::Dimension(dimension)) => (
            Some(dimension),
            stored_hash(original, dimension).to_string(),
            stored_hash(corrected, dimension).to_string(),
        ),
        _ => (
            None,
            original.hash_combined.clone(),
            corrected.hash_combined.clone(),
        ),
    }
}
