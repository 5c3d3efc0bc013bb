use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::record::Dimension;

/// The step a log entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LogAction {
    /// Hash recomputation compared against stored hashes.
    Detected,
    /// Re-derivation compared against stored derived dimensions.
    Localized,
    /// A derived dimension (or the combined hash) was regenerated.
    Corrected,
    /// The corrected record passed re-verification.
    Validated,
    /// A step refused or failed; terminates the chain.
    Failed,
}

/// One entry in the append-only correction trail.
///
/// The entries for a single verify/correct cycle form a causal chain:
/// detected before localized before corrected before validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CorrectionLogEntry {
    pub timestamp: DateTime<Utc>,
    /// Dimension acted on, when the step concerns a single dimension.
    pub dimension: Option<Dimension>,
    pub action: LogAction,
    pub hash_before: Option<String>,
    pub hash_after: Option<String>,
    pub reason: String,
}
