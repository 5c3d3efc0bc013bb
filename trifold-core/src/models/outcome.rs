use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::diagnostic::CorruptionDiagnostic;
use super::log::CorrectionLogEntry;
use crate::record::TrifoldRecord;

/// Everything `verify` produces: the diagnostic plus the log entries emitted
/// while computing it (`detected`, `localized`).
///
/// Passing this to `correct` lets one verify/correct cycle share a single
/// causally ordered log.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Verification {
    pub diagnostic: CorruptionDiagnostic,
    pub log: Vec<CorrectionLogEntry>,
}

/// Result of a correction attempt.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CorrectionOutcome {
    /// The record that was diagnosed. Never mutated.
    pub original: TrifoldRecord,
    /// The replacement record, when a correction was applied and validated.
    pub corrected: Option<TrifoldRecord>,
    /// The diagnostic that triggered the attempt.
    pub diagnostic: CorruptionDiagnostic,
    /// Whether a correction was applied.
    pub applied: bool,
    /// Ordered log entries for the whole cycle.
    pub log: Vec<CorrectionLogEntry>,
}
