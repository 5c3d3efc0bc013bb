//! Post-correction validation: prove the fix is sound before it is accepted.
//!
//! A correction that fails re-verification means the engine or a supplied
//! derivation function is broken (nondeterminism, hashing bug). That is an
//! internal-consistency fault, not a data-integrity event, and is never
//! retried.

use trifold_core::config::CorrectionConfig;
use trifold_core::models::Severity;
use trifold_core::record::TrifoldRecord;
use trifold_core::{TrifoldError, TrifoldResult};

use crate::{detector, localizer};
use crate::{DeriveSecondaryFn, DeriveTertiaryFn};

/// Re-run the detector and localizer on a corrected record and require
/// `none` severity.
pub fn validate(
    corrected: &TrifoldRecord,
    derive_secondary: &DeriveSecondaryFn,
    derive_tertiary: &DeriveTertiaryFn,
    config: &CorrectionConfig,
) -> TrifoldResult<()> {
    let detection = detector::detect(corrected)?;
    let drift = localizer::rederive_compare(corrected, derive_secondary, derive_tertiary);
    let diagnostic = localizer::classify(&corrected.record_id, &detection, &drift, config);

    if diagnostic.severity == Severity::None {
        Ok(())
    } else {
        Err(TrifoldError::InternalConsistency {
            record_id: corrected.record_id.clone(),
            details: format!(
                "corrected record still diagnoses {:?}: {}",
                diagnostic.severity, diagnostic.reason
            ),
        })
    }
}
