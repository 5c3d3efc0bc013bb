use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::record::{CorrectionTarget, Dimension};

/// How many and which dimensions disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// All representations agree.
    None,
    /// Exactly one non-canonical dimension (or only the administrative
    /// combined hash) is corrupted. Correctable.
    Minor,
    /// Two dimensions corrupted, or the canonical dimension alone. Not
    /// correctable by this engine; escalate.
    Major,
    /// All three dimensions corrupted. Unrecoverable.
    Critical,
}

impl Severity {
    /// Whether this severity admits automatic correction.
    pub fn is_correctable(self) -> bool {
        matches!(self, Severity::Minor)
    }
}

/// Result of verifying a record: which representations are corrupted, which
/// are healthy, and how sure the engine is about the localization.
///
/// Carries no timestamps: verifying the same record twice must produce
/// identical diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CorruptionDiagnostic {
    pub record_id: String,
    pub severity: Severity,
    /// Dimensions whose stored bytes or derivation disagree.
    pub corrupted_dimensions: Vec<Dimension>,
    /// Dimensions with no disagreement.
    pub healthy_dimensions: Vec<Dimension>,
    /// True when only the stored combined hash disagrees while all three
    /// representations check out. Administrative damage, content untouched.
    pub combined_hash_corrupted: bool,
    /// What a correction would repair. Present iff severity is `Minor`.
    pub target: Option<CorrectionTarget>,
    /// Localization confidence in [0.0, 1.0].
    pub confidence: f64,
    /// Human-readable classification summary.
    pub reason: String,
}

impl CorruptionDiagnostic {
    /// Diagnostic for a fully healthy record.
    pub fn healthy(record_id: &str) -> Self {
        Self {
            record_id: record_id.to_string(),
            severity: Severity::None,
            corrupted_dimensions: vec![],
            healthy_dimensions: vec![
                Dimension::Canonical,
                Dimension::Secondary,
                Dimension::Tertiary,
            ],
            combined_hash_corrupted: false,
            target: None,
            confidence: 1.0,
            reason: "all representations agree".to_string(),
        }
    }

    /// Whether `correct` can repair this record.
    pub fn is_correctable(&self) -> bool {
        self.severity.is_correctable() && self.target.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_minor_is_correctable() {
        assert!(!Severity::None.is_correctable());
        assert!(Severity::Minor.is_correctable());
        assert!(!Severity::Major.is_correctable());
        assert!(!Severity::Critical.is_correctable());
    }

    #[test]
    fn healthy_diagnostic_lists_all_dimensions() {
        let d = CorruptionDiagnostic::healthy("r1");
        assert_eq!(d.severity, Severity::None);
        assert_eq!(d.healthy_dimensions.len(), 3);
        assert!(d.corrupted_dimensions.is_empty());
        assert!(!d.is_correctable());
    }
}
