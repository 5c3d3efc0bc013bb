use crate::errors::TrifoldResult;
use crate::models::{CorrectionOutcome, Verification};
use crate::record::TrifoldRecord;

/// Correction of a diagnosed record.
pub trait ICorrector: Send + Sync {
    /// Attempt to correct `record` given its verification. Produces a new
    /// record value on success; never mutates the input.
    fn correct(
        &self,
        record: &TrifoldRecord,
        verification: &Verification,
    ) -> TrifoldResult<CorrectionOutcome>;
}
