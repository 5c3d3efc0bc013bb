use crate::errors::TrifoldResult;
use crate::models::Verification;
use crate::record::TrifoldRecord;

/// Record integrity verification: detection plus cross-consistency
/// localization.
pub trait IVerifier: Send + Sync {
    /// Verify a record, returning the diagnostic and the log entries
    /// produced while computing it.
    fn verify(&self, record: &TrifoldRecord) -> TrifoldResult<Verification>;
}
