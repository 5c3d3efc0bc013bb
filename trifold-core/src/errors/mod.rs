//! Error types for the Trifold engine.
//!
//! Integrity mismatches are data (`CorruptionDiagnostic`), never errors.
//! These variants cover the faults that cannot be expressed as a diagnostic:
//! serialization failures, caller precondition violations, and
//! internal-consistency faults after a correction.

use crate::record::Dimension;

/// Result alias used across the workspace.
pub type TrifoldResult<T> = Result<T, TrifoldError>;

/// Engine-level errors.
#[derive(Debug, thiserror::Error)]
pub enum TrifoldError {
    #[error("serialization failed for {dimension} representation: {reason}")]
    Serialization { dimension: Dimension, reason: String },

    #[error("correction precondition violated: {details}")]
    PreconditionViolation { details: String },

    #[error("internal consistency fault after correcting record {record_id}: {details}")]
    InternalConsistency { record_id: String, details: String },

    #[error("invalid configuration: {reason}")]
    Config { reason: String },
}
