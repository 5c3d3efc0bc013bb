use serde::{Deserialize, Serialize};

use crate::constants;

/// Correction engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectionConfig {
    /// Whether combined-hash-only corruption is repaired by `correct`.
    /// Content is never touched for this case; only the stored hash is
    /// recomputed.
    pub auto_repair_admin_hash: bool,
    /// Confidence assigned when a dimension drifted from canonical while its
    /// own stored hash is internally consistent.
    pub drift_only_confidence: f64,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            auto_repair_admin_hash: constants::DEFAULT_AUTO_REPAIR_ADMIN_HASH,
            drift_only_confidence: constants::DEFAULT_DRIFT_ONLY_CONFIDENCE,
        }
    }
}
